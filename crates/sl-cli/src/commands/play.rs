use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sl_session::{GameSession, SessionConfig};

pub fn run(dir: &Path, seed: u64, bank: u32) -> Result<(), String> {
    let campaign = super::load_campaign(dir)?;
    let config = SessionConfig::default().with_seed(seed).with_bank(bank);
    let mut session = GameSession::new(campaign, config);

    println!("  {} {}", "Playing".bold(), session.campaign().name);
    println!("  Seed: {seed} | Benny bank: {bank}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    session
        .campaign()
        .save(dir.join("campaign.json"))
        .map_err(|e| format!("cannot save campaign: {e}"))?;
    println!("Campaign saved.");

    Ok(())
}
