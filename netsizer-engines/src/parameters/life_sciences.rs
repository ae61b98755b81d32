//! Life-sciences sizing parameters.

use netsizer_core::errors::SizingResult;
use serde::{Deserialize, Serialize};

/// Parameters for the life-sciences sizing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeSciencesParameters {
    /// Burst throughput above which deep-buffer switching is recommended.
    /// Cryo-EM workloads get the recommendation regardless of this threshold.
    /// unit: Gbps
    /// default: 10.0
    pub deep_buffer_threshold_gbps: f64,
}

impl Default for LifeSciencesParameters {
    fn default() -> Self {
        Self {
            deep_buffer_threshold_gbps: 10.0,
        }
    }
}

impl LifeSciencesParameters {
    /// Load overrides from a TOML table; omitted fields keep their defaults.
    pub fn from_toml_str(raw: &str) -> SizingResult<Self> {
        super::from_toml(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let params = LifeSciencesParameters::default();
        assert_eq!(params.deep_buffer_threshold_gbps, 10.0);
    }

    #[test]
    fn test_toml_override() {
        let params =
            LifeSciencesParameters::from_toml_str("deep_buffer_threshold_gbps = 25.0").unwrap();
        assert_eq!(params.deep_buffer_threshold_gbps, 25.0);
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let params = LifeSciencesParameters::from_toml_str("").unwrap();
        assert_eq!(params, LifeSciencesParameters::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(LifeSciencesParameters::from_toml_str("deep_buffer_threshold_gbps = \"lots\"").is_err());
    }
}
