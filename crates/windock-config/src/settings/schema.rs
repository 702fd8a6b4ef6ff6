//! Settings types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level plugin settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub search: SearchSettings,
    pub logging: LoggingSettings,
    pub locale: LocaleSettings,
}

/// Bounded startup search for windows that are not open yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Unsuccessful polls before the search gives up.
    pub max_attempts: u32,
    /// Delay between polls, in milliseconds.
    pub interval_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            interval_ms: 6000,
        }
    }
}

impl SearchSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Log filter applied when the plugin installs its subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "windock=info".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub name: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            name: "en-US".into(),
        }
    }
}
