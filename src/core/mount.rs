use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;

static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(1);

/// Generated identity token of a mount target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountId(u64);

impl MountId {
    fn next() -> Self {
        Self(NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount#{}", self.0)
    }
}

/// Opaque handle to a drawable surface.
///
/// Equality and hashing follow identity only: every call to `new` mints a
/// fresh `MountId`, and clones share the id of the handle they came from.
/// The label and viewport are descriptive and never take part in lookups.
#[derive(Debug, Clone)]
pub struct MountTarget {
    id: MountId,
    label: Arc<str>,
    viewport: Option<Viewport>,
}

impl MountTarget {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: MountId::next(),
            label: Arc::from(label.into()),
            viewport: None,
        }
    }

    #[must_use]
    pub fn with_viewport(label: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::new(label)
        }
    }

    #[must_use]
    pub fn id(&self) -> MountId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Returns `true` when both handles refer to the same surface.
    #[must_use]
    pub fn same_target(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for MountTarget {
    fn eq(&self, other: &Self) -> bool {
        self.same_target(other)
    }
}

impl Eq for MountTarget {}

impl Hash for MountTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
