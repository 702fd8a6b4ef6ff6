//! Dock binding persistence.
//!
//! The store is a JSON array of binding records. Reads never fail from the
//! caller's point of view: a missing directory or file is created, and
//! unreadable or malformed content is logged and treated as empty.

mod binding;
mod file;

#[cfg(test)]
mod tests;

pub use binding::DockBinding;
pub use file::BindingStore;
