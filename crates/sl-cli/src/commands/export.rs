use std::path::Path;

use sl_core::Campaign;

pub fn run(dir: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let campaign = super::load_campaign(dir)?;

    let content = match format {
        "json" => export_json(&campaign)?,
        "markdown" | "md" => export_markdown(&campaign),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, json"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(campaign: &Campaign) -> Result<String, String> {
    serde_json::to_string_pretty(campaign).map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_markdown(campaign: &Campaign) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", campaign.name));

    if !campaign.characters().is_empty() {
        out.push_str("## Characters\n\n");
        for c in campaign.characters() {
            out.push_str(&format!("### {}\n\n", c.name));
            out.push_str(&format!("- Health: {}\n", c.health));
            out.push_str(&format!("- Money: {}\n", c.money));
            if !c.attributes.is_empty() {
                let parts: Vec<String> = c
                    .attributes
                    .iter()
                    .map(|(name, value)| format!("{name} {value}"))
                    .collect();
                out.push_str(&format!("- Attributes: {}\n", parts.join(", ")));
            }
            if !c.skills.is_empty() {
                let parts: Vec<String> = c
                    .skills
                    .iter()
                    .map(|(name, value)| format!("{name} {value}"))
                    .collect();
                out.push_str(&format!("- Skills: {}\n", parts.join(", ")));
            }
            if !c.equipment.is_empty() {
                let parts: Vec<String> = c
                    .equipment
                    .iter()
                    .map(|(item, n)| format!("{item} x{n}"))
                    .collect();
                out.push_str(&format!("- Equipment: {}\n", parts.join(", ")));
            }
            out.push('\n');
        }
    }

    if !campaign.monsters().is_empty() {
        out.push_str("## Monsters\n\n");
        for m in campaign.monsters() {
            let status = if m.is_alive() { "" } else { " (down)" };
            out.push_str(&format!("- {} (health {}){status}\n", m.name, m.health));
        }
        out.push('\n');
    }

    if !campaign.encounters().is_empty() {
        out.push_str("## Encounters\n\n");
        for e in campaign.encounters() {
            if e.members.is_empty() {
                out.push_str(&format!("- {} (empty)\n", e.name));
            } else {
                out.push_str(&format!("- {}: {}\n", e.name, e.members.join(", ")));
            }
        }
        out.push('\n');
    }

    if !campaign.store.is_empty() {
        out.push_str("## Store\n\n");
        for item in campaign.store.items() {
            out.push_str(&format!("- {}: {}\n", item.name, item.price));
        }
        out.push('\n');
    }

    out
}
