use serde::{Deserialize, Serialize};

use crate::core::MountId;

/// Read-only registry state passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryContext {
    pub entry_count: usize,
}

/// Decisions reported to plugins once a render request completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    InstanceCreated { mount_id: MountId },
    InstanceUpdated { mount_id: MountId },
    RenderSkipped { mount_id: MountId },
}

impl RegistryEvent {
    #[must_use]
    pub fn mount_id(self) -> MountId {
        match self {
            Self::InstanceCreated { mount_id }
            | Self::InstanceUpdated { mount_id }
            | Self::RenderSkipped { mount_id } => mount_id,
        }
    }
}

/// Extension hook interface for observing the registry.
pub trait RegistryPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: RegistryEvent, context: RegistryContext);
}
