//! Storage fabric planner parameters.

use netsizer_core::errors::SizingResult;
use serde::{Deserialize, Serialize};

/// Parameters for the storage fabric planning engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageFabricParameters {
    /// Oversubscription factor above which deep-buffer platforms are selected
    /// and the oversubscription warning is raised.
    /// default: 2
    pub deep_buffer_oversub_threshold: u32,
    /// Hosts grouped per scalable unit when sizing the port plan. Must be at
    /// least 1.
    /// default: 4
    pub hosts_per_su: u32,
    /// Per-host bandwidth assumed when a preset label does not carry one.
    /// unit: Gb
    /// default: 200
    pub fallback_preset_gb: u32,
}

impl Default for StorageFabricParameters {
    fn default() -> Self {
        Self {
            deep_buffer_oversub_threshold: 2,
            hosts_per_su: 4,
            fallback_preset_gb: 200,
        }
    }
}

impl StorageFabricParameters {
    /// Load overrides from a TOML table; omitted fields keep their defaults.
    pub fn from_toml_str(raw: &str) -> SizingResult<Self> {
        super::from_toml(raw)
    }
}
