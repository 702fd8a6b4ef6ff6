mod ensure;
mod resolve;

pub use ensure::ensure_plugin_dir;
pub use resolve::{bindings_file, host_config_dir, locale_dir, plugin_config_dir, settings_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_dir_has_fixed_subpath() {
        let path = plugin_config_dir().unwrap();
        assert!(
            path.ends_with("obs-studio/plugin_config/window-dock"),
            "plugin_config_dir should end with the plugin subpath, got: {path:?}"
        );
    }

    #[test]
    fn bindings_file_has_correct_name() {
        let path = bindings_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "config.json");
        assert!(path.parent().unwrap().ends_with("window-dock"));
    }

    #[test]
    fn settings_file_sits_next_to_bindings() {
        let settings = settings_file().unwrap();
        let bindings = bindings_file().unwrap();
        assert_eq!(settings.parent(), bindings.parent());
        assert_eq!(settings.file_name().unwrap().to_str().unwrap(), "settings.toml");
    }

    #[test]
    fn locale_dir_is_inside_plugin_dir() {
        let locale = locale_dir().unwrap();
        let plugin = plugin_config_dir().unwrap();
        assert!(locale.starts_with(&plugin));
    }

    #[test]
    fn plugin_dir_is_inside_host_dir() {
        let host = host_config_dir().unwrap();
        let plugin = plugin_config_dir().unwrap();
        assert!(plugin.starts_with(&host));
    }
}
