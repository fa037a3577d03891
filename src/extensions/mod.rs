//! Optional observer hooks live here.
//!
//! Plugins watch registry decisions without being able to influence them.

pub mod plugins;

pub use plugins::{RegistryContext, RegistryEvent, RegistryPlugin};
