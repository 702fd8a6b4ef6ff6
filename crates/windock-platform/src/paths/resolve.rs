use std::path::PathBuf;

use windock_common::PlatformError;

pub(super) const HOST_APP_DIR: &str = "obs-studio";
pub(super) const PLUGIN_SUBPATH: [&str; 2] = ["plugin_config", "window-dock"];

/// Returns the host application's per-user configuration directory.
///
/// - Windows: `%APPDATA%\obs-studio`
/// - macOS: `~/Library/Application Support/obs-studio`
/// - Linux: `$XDG_CONFIG_HOME/obs-studio` (defaults to `~/.config/obs-studio`)
pub fn host_config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(HOST_APP_DIR))
}

/// Returns this plugin's configuration directory.
///
/// Located at `host_config_dir()/plugin_config/window-dock`.
pub fn plugin_config_dir() -> Result<PathBuf, PlatformError> {
    Ok(PLUGIN_SUBPATH
        .iter()
        .fold(host_config_dir()?, |path, part| path.join(part)))
}

/// Returns the path to the persisted dock bindings.
///
/// Located at `plugin_config_dir()/config.json`.
pub fn bindings_file() -> Result<PathBuf, PlatformError> {
    Ok(plugin_config_dir()?.join("config.json"))
}

/// Returns the path to the optional plugin settings.
///
/// Located at `plugin_config_dir()/settings.toml`.
pub fn settings_file() -> Result<PathBuf, PlatformError> {
    Ok(plugin_config_dir()?.join("settings.toml"))
}

/// Returns the directory searched for user locale overrides.
///
/// Located at `plugin_config_dir()/locale`.
pub fn locale_dir() -> Result<PathBuf, PlatformError> {
    Ok(plugin_config_dir()?.join("locale"))
}
