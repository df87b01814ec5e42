pub mod export;
pub mod init;
pub mod list;
pub mod play;
pub mod roll;

use std::path::Path;

use sl_core::Campaign;

/// Load the campaign file from a campaign directory.
fn load_campaign(dir: &Path) -> Result<Campaign, String> {
    let path = dir.join("campaign.json");
    if !path.exists() {
        return Err(format!(
            "no campaign.json in {}; run 'sl init <name>' first",
            dir.display()
        ));
    }
    Campaign::load(&path).map_err(|e| format!("cannot load {}: {e}", path.display()))
}
