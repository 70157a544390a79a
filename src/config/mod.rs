mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load connection settings from a TOML file
///
/// Required fields are not checked here; the adapter validates them when it
/// is created so the error can name the connection.
pub fn load_settings(path: &Path) -> Result<HeadlessDamSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {:?}", path))?;

    let settings: HeadlessDamSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {:?}", path))?;

    Ok(settings)
}

/// Parse connection settings from the JSON object a host hands over
pub fn settings_from_json(json: &str) -> Result<HeadlessDamSettings> {
    serde_json::from_str(json).context("Failed to parse headless DAM settings")
}
