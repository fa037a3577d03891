//! chart-registry: identity-keyed chart instance cache.
//!
//! Sits between application state and a stateful chart object supplied by the
//! host. Each mount target gets one instance; repeated requests either do
//! nothing (data unchanged), or deep-merge configuration onto the existing
//! instance and repaint it.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartRegistry, RegistryConfig, RenderOutcome, RenderRequest};
pub use error::{ChartError, ChartResult};
