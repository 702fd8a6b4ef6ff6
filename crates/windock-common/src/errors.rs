use std::path::PathBuf;

use crate::id::DockId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config write error: {0}")]
    WriteError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config directory error: {0}")]
    DirectoryError(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("window system error: {0}")]
    WindowSystemError(String),

    #[error("stale window handle: {0:#x}")]
    StaleHandle(isize),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error("host could not provide a container for {0}")]
    ContainerUnavailable(DockId),

    #[error("host rejected panel registration for {0}")]
    RegistrationFailed(DockId),

    #[error("no active dock named {0}")]
    UnknownDock(DockId),
}
