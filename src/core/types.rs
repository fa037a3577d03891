use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped chart configuration and dataset representation.
///
/// Both the data a host asks to visualize and the option records handed to
/// chart instances share this JSON-like model so merges stay fully generic.
pub type ChartConfig = Value;

/// Returns the empty record used whenever no configuration was supplied.
#[must_use]
pub fn empty_config() -> ChartConfig {
    Value::Object(Map::new())
}

/// Pixel size of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
