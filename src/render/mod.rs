mod headless;

pub use headless::HeadlessChart;

use crate::core::ChartConfig;
use crate::error::ChartResult;

/// Contract implemented by any stateful chart object the registry manages.
///
/// The registry never draws anything itself: it hands a fully merged option
/// record to `set_option` and then asks the instance to repaint.
pub trait ChartInstance {
    fn set_option(&mut self, option: &ChartConfig) -> ChartResult<()>;
    fn render(&mut self) -> ChartResult<()>;
}

impl<C: ChartInstance + ?Sized> ChartInstance for Box<C> {
    fn set_option(&mut self, option: &ChartConfig) -> ChartResult<()> {
        (**self).set_option(option)
    }

    fn render(&mut self) -> ChartResult<()> {
        (**self).render()
    }
}
