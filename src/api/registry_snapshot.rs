use serde::{Deserialize, Serialize};

use crate::core::{ChartConfig, MountId};
use crate::error::{ChartError, ChartResult};

use super::ChartRegistry;

pub const REGISTRY_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of one registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    pub mount_id: MountId,
    pub label: String,
    pub last_data: ChartConfig,
    pub update_count: usize,
    pub skip_count: usize,
}

/// Serializable view of the whole registry, entries in creation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub entries: Vec<EntrySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RegistrySnapshot,
}

impl RegistrySnapshot {
    #[must_use]
    pub fn find(&self, mount_id: MountId) -> Option<&EntrySnapshot> {
        self.entries.iter().find(|entry| entry.mount_id == mount_id)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RegistrySnapshotJsonContractV1 {
            schema_version: REGISTRY_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize registry snapshot v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<RegistrySnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: RegistrySnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse registry snapshot json: {e}"))
            })?;
        if payload.schema_version != REGISTRY_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported registry snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<C> ChartRegistry<C> {
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        let entries = self
            .entries()
            .map(|entry| EntrySnapshot {
                mount_id: entry.target().id(),
                label: entry.target().label().to_owned(),
                last_data: entry.last_data().clone(),
                update_count: entry.update_count(),
                skip_count: entry.skip_count(),
            })
            .collect();
        RegistrySnapshot { entries }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
