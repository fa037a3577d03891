mod plugin_registry;
mod registry;
mod registry_config;
mod registry_snapshot;
mod render_request;

pub use registry::{
    ChartRegistry, ChartRegistryBuilder, CreateChartFn, OriginConfigFn, RegistryEntry,
    StateManagerFn,
};
pub use registry_config::RegistryConfig;
pub use registry_snapshot::{
    EntrySnapshot, REGISTRY_SNAPSHOT_JSON_SCHEMA_V1, RegistrySnapshot,
    RegistrySnapshotJsonContractV1,
};
pub use render_request::{RenderOutcome, RenderRequest};
