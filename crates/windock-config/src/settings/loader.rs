//! Settings loading: read from a path or the per-user default.

use std::path::Path;

use tracing::{info, warn};
use windock_common::ConfigError;

use super::schema::PluginSettings;
use super::validation::{clamp, validate};

/// Load settings from a specific TOML file.
///
/// Missing fields take their defaults. Out-of-range values are reported
/// with a warning and clamped.
pub fn load_from_path(path: &Path) -> Result<PluginSettings, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let settings: PluginSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    let settings = match validate(&settings) {
        Ok(()) => settings,
        Err(e) => {
            warn!("settings validation warning: {e}, clamping to supported values");
            clamp(settings)
        }
    };

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the per-user default location.
///
/// The file is optional and never created: a missing file silently yields
/// defaults, an unreadable or malformed one yields defaults with a warning.
pub fn load_default() -> PluginSettings {
    let path = match windock_platform::settings_file() {
        Ok(path) => path,
        Err(e) => {
            warn!("could not resolve settings path: {e}, using defaults");
            return PluginSettings::default();
        }
    };
    if !path.exists() {
        return PluginSettings::default();
    }
    load_from_path(&path).unwrap_or_else(|e| {
        warn!("{e}, using default settings");
        PluginSettings::default()
    })
}
