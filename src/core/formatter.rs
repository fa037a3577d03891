use std::fmt;
use std::rc::Rc;

use crate::core::types::ChartConfig;
use crate::error::ChartResult;

/// Post-processing step applied to a merged configuration.
///
/// Cheap to clone; clones share the same function. The function is expected
/// to be pure, its output becomes the final configuration.
#[derive(Clone)]
pub struct ConfigFormatter {
    format: Rc<dyn Fn(ChartConfig) -> ChartResult<ChartConfig>>,
}

impl ConfigFormatter {
    pub fn new(format: impl Fn(ChartConfig) -> ChartResult<ChartConfig> + 'static) -> Self {
        Self {
            format: Rc::new(format),
        }
    }

    /// Wraps an infallible formatting function.
    pub fn from_fn(format: impl Fn(ChartConfig) -> ChartConfig + 'static) -> Self {
        Self::new(move |config| Ok(format(config)))
    }

    pub fn apply(&self, config: ChartConfig) -> ChartResult<ChartConfig> {
        (self.format)(config)
    }
}

impl fmt::Debug for ConfigFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFormatter").finish_non_exhaustive()
    }
}
