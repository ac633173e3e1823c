//! Shared build configuration applied identically to every artifact.
//!
//! One read-only [`Settings`] record drives the whole run: target platform,
//! output module format, source-map and minification policy, the external
//! module set, and the output directory. Constructed once via
//! [`SettingsBuilder`], never mutated afterwards.

mod builder;
mod core;
mod format;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use format::{ModuleFormat, Platform};
