use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sl_mechanics::RollExpression;

pub fn run(expression: &str, seed: Option<u64>) -> Result<(), String> {
    let expr = RollExpression::parse(expression).map_err(|e| e.to_string())?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let outcome = expr.roll(&mut rng);

    println!("  {} {expr}: {outcome}", "Rolled".bold());

    Ok(())
}
