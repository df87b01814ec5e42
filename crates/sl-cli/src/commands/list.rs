use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path, what: &str) -> Result<(), String> {
    let campaign = super::load_campaign(dir)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let (count, noun) = match what.to_lowercase().as_str() {
        "chars" | "characters" => {
            let characters = campaign.characters();
            if characters.is_empty() {
                println!("  No characters yet.");
                return Ok(());
            }
            table.set_header(vec!["Name", "Health", "Money", "Equipment"]);
            for c in characters {
                let equipment: Vec<String> = c
                    .equipment
                    .iter()
                    .map(|(item, n)| format!("{item} x{n}"))
                    .collect();
                let equipment = if equipment.is_empty() {
                    "—".to_string()
                } else {
                    equipment.join(", ")
                };
                table.add_row(vec![
                    c.name.clone(),
                    c.health.to_string(),
                    c.money.to_string(),
                    equipment,
                ]);
            }
            (characters.len(), "characters")
        }
        "monsters" => {
            let monsters = campaign.monsters();
            if monsters.is_empty() {
                println!("  No monsters yet.");
                return Ok(());
            }
            table.set_header(vec!["Name", "Health", "Status"]);
            for m in monsters {
                let status = if m.is_alive() { "up" } else { "down" };
                table.add_row(vec![m.name.clone(), m.health.to_string(), status.to_string()]);
            }
            (monsters.len(), "monsters")
        }
        "encs" | "encounters" => {
            let encounters = campaign.encounters();
            if encounters.is_empty() {
                println!("  No encounters yet.");
                return Ok(());
            }
            table.set_header(vec!["Name", "Members"]);
            for e in encounters {
                let members = if e.members.is_empty() {
                    "—".to_string()
                } else {
                    e.members.join(", ")
                };
                table.add_row(vec![e.name.clone(), members]);
            }
            (encounters.len(), "encounters")
        }
        "store" => {
            let items = campaign.store.items();
            if items.is_empty() {
                println!("  The store is empty.");
                return Ok(());
            }
            table.set_header(vec!["Item", "Price"]);
            for item in items {
                table.add_row(vec![item.name.clone(), item.price.to_string()]);
            }
            (items.len(), "items")
        }
        _ => {
            return Err(format!(
                "unknown listing \"{what}\". Use: chars, monsters, encounters, store"
            ));
        }
    };

    println!("{table}");
    println!();
    println!("  {count} {noun}");

    Ok(())
}
