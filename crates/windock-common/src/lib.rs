pub mod errors;
pub mod id;
pub mod strings;
pub mod types;

pub use errors::{ConfigError, DockError, PlatformError};
pub use id::{DockId, DOCK_ID_PREFIX};
pub use strings::Translate;
pub use types::{Dpi, Rect, SurfaceHandle, WindowHandle, WindowStyle};
