use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub storage: Option<StorageConfig>,
    pub location: Option<LocationConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

/// Fixed device coordinates for installs where the machine doesn't move.
/// `allow = false` records a user who refused location lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_allow")]
    pub allow: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn default_allow() -> bool {
    true
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".publicpulse")
        .join("config.toml")
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".publicpulse")
}

pub fn data_dir(config: &AppConfig) -> PathBuf {
    config
        .storage
        .as_ref()
        .and_then(|s| s.data_dir.clone())
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir)
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_defaults_when_unconfigured() {
        let config = AppConfig::default();
        assert_eq!(data_dir(&config), default_data_dir());
    }

    #[test]
    fn data_dir_honors_storage_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/pulse-test"
            "#,
        )
        .unwrap();
        assert_eq!(data_dir(&config), PathBuf::from("/tmp/pulse-test"));
    }

    #[test]
    fn location_allow_defaults_to_true() {
        let config: AppConfig = toml::from_str(
            r#"
            [location]
            latitude = 17.3850
            longitude = 78.4867
            "#,
        )
        .unwrap();
        let location = config.location.unwrap();
        assert!(location.allow);
        assert_eq!(location.latitude, Some(17.3850));
    }
}
