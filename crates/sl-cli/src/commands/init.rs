use std::fs;
use std::path::Path;

use sl_core::Campaign;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    let mut campaign = Campaign::new(name);
    // Starter stock so 'store' and 'buy' have something to offer.
    campaign.store.add("Rope", 5).map_err(|e| e.to_string())?;
    campaign.store.add("Torch", 2).map_err(|e| e.to_string())?;
    campaign
        .store
        .add("Healing Potion", 10)
        .map_err(|e| e.to_string())?;

    campaign
        .save(dir.join("campaign.json"))
        .map_err(|e| format!("cannot write campaign.json: {e}"))?;

    println!("Created campaign '{name}' in {name}/");
    println!("  campaign.json  — characters, monsters, encounters, store");
    println!();
    println!("Get started:");
    println!("  cd {name}");
    println!("  sl play                  # Start a session, then at the prompt:");
    println!("  > char create Alice      #   create a character");
    println!("  > deal                   #   deal initiative");
    println!("  > help                   #   see everything else");

    Ok(())
}
