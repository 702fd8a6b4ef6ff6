//! Window docks plugin entry point.
//!
//! The host's module hooks, menu callback, dialog buttons, timers and
//! resize events all land on [`WindowDockPlugin`]. Everything runs on the
//! host UI thread.

pub mod dialog;
pub mod logging;
mod plugin;

#[cfg(test)]
mod tests;

pub use dialog::{picker_entries, DialogText, PickerEntry};
pub use plugin::WindowDockPlugin;
