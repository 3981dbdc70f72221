use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::model::profile::Profile;

fn profile_path(data_dir: &Path) -> PathBuf {
    data_dir.join("profile.json")
}

/// A missing or unreadable profile reads as `None`; the app then routes to
/// the intake form first.
pub fn load_profile(data_dir: &Path) -> Option<Profile> {
    let path = profile_path(data_dir);
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

pub fn save_profile(data_dir: &Path, profile: &Profile) -> Result<()> {
    let path = profile_path(data_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(&path, json)?;
    Ok(())
}
