use std::fs;
use std::path::PathBuf;

use windock_common::PlatformError;

use super::resolve::plugin_config_dir;

/// Creates the plugin configuration directory (recursively) if missing.
pub fn ensure_plugin_dir() -> Result<PathBuf, PlatformError> {
    let dir = plugin_config_dir()?;
    fs::create_dir_all(&dir).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(dir)
}
