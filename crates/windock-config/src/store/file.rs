use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use windock_common::{ConfigError, PlatformError};

use super::binding::DockBinding;

/// Store location under the temp directory when no config dir resolves.
const FALLBACK_DIR: &str = "window-dock";
const FALLBACK_FILE: &str = "config.json";

/// File-backed store of dock bindings.
#[derive(Debug, Clone)]
pub struct BindingStore {
    path: PathBuf,
}

impl BindingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user default location.
    ///
    /// Without a resolvable config directory the store lives under the
    /// system temp directory instead.
    pub fn open_default() -> Self {
        Self::new(path_or_fallback(windock_platform::bindings_file()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all bindings, substituting an empty set on any failure.
    pub fn load(&self) -> Vec<DockBinding> {
        match self.try_load() {
            Ok(bindings) => bindings,
            Err(e) => {
                warn!("{e}, treating dock store as empty");
                Vec::new()
            }
        }
    }

    /// Load all bindings.
    ///
    /// Creates the parent directory and an empty `[]` file when missing.
    /// Array elements that are not binding objects, or that carry no
    /// identity, are skipped.
    pub fn try_load(&self) -> Result<Vec<DockBinding>, ConfigError> {
        self.ensure_parent()?;

        if !self.path.exists() {
            std::fs::write(&self.path, "[]").map_err(|e| {
                ConfigError::WriteError(format!(
                    "failed to create {}: {e}",
                    self.path.display()
                ))
            })?;
            info!("created empty dock store at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?;
        let serde_json::Value::Array(items) = value else {
            return Err(ConfigError::ParseError(
                "dock store is not a JSON array".into(),
            ));
        };

        let bindings = items
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value::<DockBinding>(item) {
                Ok(binding) if !binding.id.is_empty() => Some(binding),
                Ok(_) => {
                    debug!(index = idx, "skipping dock record without dockId");
                    None
                }
                Err(e) => {
                    warn!(index = idx, "skipping malformed dock record: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!(count = bindings.len(), "loaded dock store");
        Ok(bindings)
    }

    /// Replace the stored set with `bindings`.
    pub fn save(&self, bindings: &[DockBinding]) -> Result<(), ConfigError> {
        self.ensure_parent()?;

        let content = serde_json::to_string_pretty(bindings)
            .map_err(|e| ConfigError::WriteError(format!("failed to serialize bindings: {e}")))?;
        std::fs::write(&self.path, content).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to write {}: {e}",
                self.path.display()
            ))
        })?;

        info!(count = bindings.len(), "saved dock store to {}", self.path.display());
        Ok(())
    }

    fn ensure_parent(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|_| ConfigError::DirectoryError(parent.to_path_buf()))?;
        }
        Ok(())
    }
}

pub(super) fn path_or_fallback(resolved: Result<PathBuf, PlatformError>) -> PathBuf {
    match resolved {
        Ok(path) => path,
        Err(e) => {
            let fallback = std::env::temp_dir()
                .join(FALLBACK_DIR)
                .join(FALLBACK_FILE);
            warn!("{e}, keeping dock store at {}", fallback.display());
            fallback
        }
    }
}
