use std::time::Duration;

use crate::config::AppConfig;

pub const DENIED: &str = "Location access denied";
pub const UNSUPPORTED: &str = "GPS not supported";

/// Resolves the device position as a "lat, lon" string, or one of the two
/// sentinel strings when no position is available. Spawned from the report
/// form; the result comes back to the app as an action.
pub async fn resolve_location(config: &AppConfig) -> String {
    tokio::time::sleep(Duration::from_millis(150)).await;
    resolve(
        config,
        std::env::var("PULSE_LAT").ok().as_deref(),
        std::env::var("PULSE_LON").ok().as_deref(),
    )
}

fn resolve(config: &AppConfig, env_lat: Option<&str>, env_lon: Option<&str>) -> String {
    if let Some(location) = &config.location {
        if !location.allow {
            return DENIED.to_string();
        }
        if let (Some(lat), Some(lon)) = (location.latitude, location.longitude) {
            return format!("{lat}, {lon}");
        }
        // The section opted in but carries no coordinates.
        return env_position(env_lat, env_lon).unwrap_or_else(|| DENIED.to_string());
    }
    env_position(env_lat, env_lon).unwrap_or_else(|| UNSUPPORTED.to_string())
}

fn env_position(env_lat: Option<&str>, env_lon: Option<&str>) -> Option<String> {
    let lat: f64 = env_lat?.parse().ok()?;
    let lon: f64 = env_lon?.parse().ok()?;
    Some(format!("{lat}, {lon}"))
}
