//! Build-time Configuration
//!
//! Values baked in by the bundler through environment variables.

use log::Level;

/// Path the backend serves the resource listing on
pub const RESOURCES_PATH: &str = "/api/resources";

const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// History base the router is mounted under (`BASE_URL`). Empty for `/`.
pub fn base_path() -> String {
    normalize_base(option_env!("BASE_URL"))
}

/// Console log level (`DASHBOARD_LOG_LEVEL`, default `info`)
pub fn log_level() -> Level {
    parse_log_level(option_env!("DASHBOARD_LOG_LEVEL"))
}

/// Normalize a base path to the `/segment` form the router expects.
/// The root base (empty, missing or `/`) becomes an empty string.
pub fn normalize_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
