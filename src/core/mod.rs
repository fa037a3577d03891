pub mod equality;
pub mod formatter;
pub mod merge;
pub mod mount;
pub mod types;

pub use equality::{NumberEquality, deep_equal};
pub use formatter::ConfigFormatter;
pub use merge::{format_merge_config, merge_config};
pub use mount::{MountId, MountTarget};
pub use types::{ChartConfig, Viewport, empty_config};
