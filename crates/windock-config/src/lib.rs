//! Persistence and configuration for the window-docks plugin.
//!
//! - `store`: the JSON array of dock bindings (`config.json`)
//! - `settings`: optional TOML tuning (`settings.toml`) with validation
//! - `locale`: `Key="Value"` string tables with an embedded `en-US` base

pub mod locale;
pub mod settings;
pub mod store;

pub use locale::{keys, Locale};
pub use settings::{LocaleSettings, LoggingSettings, PluginSettings, SearchSettings};
pub use store::{BindingStore, DockBinding};
