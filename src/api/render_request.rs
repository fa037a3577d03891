use serde::{Deserialize, Serialize};

use crate::core::{ChartConfig, ConfigFormatter, MountId, MountTarget};
use crate::extensions::RegistryEvent;

/// One "this data should now be visualized at this target" event.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub target: MountTarget,
    pub data: ChartConfig,
    pub config: Option<ChartConfig>,
    pub format_config: Option<ConfigFormatter>,
}

impl RenderRequest {
    #[must_use]
    pub fn new(target: MountTarget, data: ChartConfig) -> Self {
        Self {
            target,
            data,
            config: None,
            format_config: None,
        }
    }

    /// Sets the partial configuration overlay.
    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the post-merge formatting step.
    #[must_use]
    pub fn with_format_config(mut self, format_config: ConfigFormatter) -> Self {
        self.format_config = Some(format_config);
        self
    }
}

/// Which path a render request took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    /// First request for the target; a new instance was built.
    Created,
    /// Data changed; the existing instance was reconfigured and repainted.
    Updated,
    /// Data deep-equals the stored data; nothing was touched.
    Unchanged,
}

impl RenderOutcome {
    pub(super) fn event(self, mount_id: MountId) -> RegistryEvent {
        match self {
            Self::Created => RegistryEvent::InstanceCreated { mount_id },
            Self::Updated => RegistryEvent::InstanceUpdated { mount_id },
            Self::Unchanged => RegistryEvent::RenderSkipped { mount_id },
        }
    }
}
