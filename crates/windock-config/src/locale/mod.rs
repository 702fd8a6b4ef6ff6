//! Locale string tables.
//!
//! The `en-US` table is compiled in. Other locales are read from
//! `<dir>/<name>.ini` and overlaid on it, so a partial translation still
//! renders every string.

pub mod keys;
mod parse;

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};
use windock_common::Translate;

pub use parse::parse_table;

const BUILTIN_NAME: &str = "en-US";
const BUILTIN_TABLE: &str = include_str!("../../locale/en-US.ini");

#[derive(Debug, Clone)]
pub struct Locale {
    name: String,
    strings: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Locale {
    /// The embedded `en-US` table.
    pub fn builtin() -> Self {
        Self {
            name: BUILTIN_NAME.to_string(),
            strings: parse_table(BUILTIN_TABLE),
        }
    }

    /// Load `name`, overlaying `<dir>/<name>.ini` on the builtin table.
    ///
    /// An unreadable file is logged and ignored; the result always holds at
    /// least the builtin strings.
    pub fn load(name: &str, dir: Option<&Path>) -> Self {
        let mut locale = Self::builtin();
        let Some(dir) = dir else {
            return locale;
        };

        let path = dir.join(format!("{name}.ini"));
        if !path.exists() {
            debug!(locale = name, path = %path.display(), "no locale override file");
            return locale;
        }
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                locale.strings.extend(parse_table(&text));
                locale.name = name.to_string();
            }
            Err(e) => warn!(locale = name, "failed to read {}: {e}", path.display()),
        }
        locale
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }
}

impl Translate for Locale {
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_key() {
        let locale = Locale::builtin();
        assert_eq!(locale.name(), "en-US");
        for key in keys::ALL {
            assert!(locale.get(key).is_some(), "missing builtin string for {key}");
        }
    }

    #[test]
    fn builtin_expands_newlines() {
        let locale = Locale::builtin();
        let text = locale.translate(keys::BLANK_DOCK_DESCRIPTION);
        assert!(text.contains('\n'));
        assert!(!text.contains("\\n"));
    }

    #[test]
    fn missing_key_translates_to_itself() {
        let locale = Locale::builtin();
        assert_eq!(locale.translate("Nope.Missing"), "Nope.Missing");
    }

    #[test]
    fn override_file_overlays_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("de-DE.ini"),
            "DockManagement.Apply=\"Anwenden\"\n",
        )
        .unwrap();

        let locale = Locale::load("de-DE", Some(dir.path()));
        assert_eq!(locale.name(), "de-DE");
        assert_eq!(locale.translate(keys::DIALOG_APPLY), "Anwenden");
        assert_eq!(locale.translate(keys::DIALOG_CLOSE), "Close");
    }

    #[test]
    fn missing_override_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let locale = Locale::load("fr-FR", Some(dir.path()));
        assert_eq!(locale.name(), "en-US");
        assert_eq!(locale.translate(keys::DIALOG_APPLY), "Apply");
    }

    #[test]
    fn no_directory_means_builtin() {
        let locale = Locale::load("fr-FR", None);
        assert_eq!(locale.translate(keys::BLANK_DOCK_CAPTURE), "Capture Window");
    }
}
