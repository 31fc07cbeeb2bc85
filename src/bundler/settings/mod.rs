//! Configuration for packaging runs.
//!
//! [`Settings`] is immutable once built; construct it with [`SettingsBuilder`].

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use core::Settings;
