//! Range validation and clamping for plugin settings.

use windock_common::ConfigError;

use super::schema::PluginSettings;

pub(crate) const MAX_ATTEMPTS_RANGE: (u32, u32) = (1, 100);
pub(crate) const INTERVAL_MS_RANGE: (u64, u64) = (250, 600_000);

/// Run all validations, collecting every error into one `ConfigError`.
pub fn validate(settings: &PluginSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "search.max_attempts",
        u64::from(settings.search.max_attempts),
        u64::from(MAX_ATTEMPTS_RANGE.0),
        u64::from(MAX_ATTEMPTS_RANGE.1),
    );
    validate_range(
        &mut errors,
        "search.interval_ms",
        settings.search.interval_ms,
        INTERVAL_MS_RANGE.0,
        INTERVAL_MS_RANGE.1,
    );
    if settings.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }
    if settings.locale.name.trim().is_empty() {
        errors.push("locale.name must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Pull out-of-range values back into range and restore empty strings to
/// their defaults.
pub(crate) fn clamp(mut settings: PluginSettings) -> PluginSettings {
    let defaults = PluginSettings::default();
    settings.search.max_attempts = settings
        .search
        .max_attempts
        .clamp(MAX_ATTEMPTS_RANGE.0, MAX_ATTEMPTS_RANGE.1);
    settings.search.interval_ms = settings
        .search
        .interval_ms
        .clamp(INTERVAL_MS_RANGE.0, INTERVAL_MS_RANGE.1);
    if settings.logging.level.trim().is_empty() {
        settings.logging = defaults.logging;
    }
    if settings.locale.name.trim().is_empty() {
        settings.locale = defaults.locale;
    }
    settings
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
