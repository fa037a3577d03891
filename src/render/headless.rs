use crate::core::{ChartConfig, MountTarget, Viewport, empty_config};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartInstance;

/// Chart instance without a drawing backend.
///
/// Used by tests and headless hosts. It still validates what it is given so
/// callers catch malformed options before a real backend is wired in.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessChart {
    viewport: Viewport,
    option: ChartConfig,
    last_rendered: Option<ChartConfig>,
    option_updates: usize,
    render_count: usize,
}

impl HeadlessChart {
    pub fn new(viewport: Viewport, option: ChartConfig) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            option,
            last_rendered: None,
            option_updates: 0,
            render_count: 0,
        })
    }

    /// Builds an instance sized to `target`, falling back to `fallback` when
    /// the target carries no viewport.
    pub fn for_target(
        target: &MountTarget,
        fallback: Viewport,
        option: ChartConfig,
    ) -> ChartResult<Self> {
        Self::new(target.viewport().unwrap_or(fallback), option)
    }

    /// Builds an instance with an empty option record.
    pub fn empty(viewport: Viewport) -> ChartResult<Self> {
        Self::new(viewport, empty_config())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn option(&self) -> &ChartConfig {
        &self.option
    }

    /// Option as of the most recent successful `render`.
    #[must_use]
    pub fn last_rendered(&self) -> Option<&ChartConfig> {
        self.last_rendered.as_ref()
    }

    #[must_use]
    pub fn option_updates(&self) -> usize {
        self.option_updates
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl ChartInstance for HeadlessChart {
    fn set_option(&mut self, option: &ChartConfig) -> ChartResult<()> {
        self.option = option.clone();
        self.option_updates += 1;
        Ok(())
    }

    fn render(&mut self) -> ChartResult<()> {
        if !self.option.is_object() {
            return Err(ChartError::InvalidConfig(
                "chart option must be a record".to_owned(),
            ));
        }
        self.last_rendered = Some(self.option.clone());
        self.render_count += 1;
        Ok(())
    }
}
