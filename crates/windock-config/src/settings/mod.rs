//! Optional TOML tuning for the plugin.
//!
//! Every section uses serde defaults, so an absent or partial
//! `settings.toml` works out of the box.

mod loader;
mod schema;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{load_default, load_from_path};
pub use schema::{LocaleSettings, LoggingSettings, PluginSettings, SearchSettings};
pub use validation::validate;
