//! Storage fabric planning vocabulary.
//!
//! Inputs to the fabric planner as the consuming tools supply them. All of
//! the closed-set fields are enums whose serialized form matches the display
//! strings used in the request payloads; the two open-ended fields (the
//! design preset label and the protocol name) stay as strings and expose the
//! narrow views the planner actually needs.

use crate::errors::SizingError;
use crate::units::{OversubscriptionRatio, PortSpeed};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dominant traffic direction expected on the fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficMix {
    #[serde(rename = "E-W heavy")]
    EastWestHeavy,
    #[serde(rename = "N-S heavy")]
    NorthSouthHeavy,
    Balanced,
}

impl FromStr for TrafficMix {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E-W heavy" => Ok(TrafficMix::EastWestHeavy),
            "N-S heavy" => Ok(TrafficMix::NorthSouthHeavy),
            "Balanced" => Ok(TrafficMix::Balanced),
            other => Err(SizingError::UnknownTrafficMix(other.to_string())),
        }
    }
}

impl fmt::Display for TrafficMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrafficMix::EastWestHeavy => "E-W heavy",
            TrafficMix::NorthSouthHeavy => "N-S heavy",
            TrafficMix::Balanced => "Balanced",
        };
        f.write_str(s)
    }
}

/// Latency target for the storage workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatencyTier {
    Standard,
    #[serde(rename = "Ultra-low")]
    UltraLow,
}

impl FromStr for LatencyTier {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Standard" => Ok(LatencyTier::Standard),
            "Ultra-low" => Ok(LatencyTier::UltraLow),
            other => Err(SizingError::UnknownLatencyTier(other.to_string())),
        }
    }
}

impl fmt::Display for LatencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LatencyTier::Standard => "Standard",
            LatencyTier::UltraLow => "Ultra-low",
        };
        f.write_str(s)
    }
}

/// Fabric redundancy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedundancyMode {
    #[serde(rename = "Dual-fabric")]
    DualFabric,
    #[serde(rename = "Single-fabric")]
    SingleFabric,
}

impl FromStr for RedundancyMode {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Dual-fabric" => Ok(RedundancyMode::DualFabric),
            "Single-fabric" => Ok(RedundancyMode::SingleFabric),
            other => Err(SizingError::UnknownRedundancy(other.to_string())),
        }
    }
}

impl fmt::Display for RedundancyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RedundancyMode::DualFabric => "Dual-fabric",
            RedundancyMode::SingleFabric => "Single-fabric",
        };
        f.write_str(s)
    }
}

/// Scalable-unit design preset label, e.g. `"2-4-3-200"`.
///
/// The fourth dash-separated token encodes the intended per-host bandwidth in
/// Gb. Labels are treated as opaque otherwise; an unparseable token falls
/// back to the caller-supplied default rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignPreset(String);

impl DesignPreset {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Per-host bandwidth implied by the preset label.
    ///
    /// Parses the fourth dash-separated token as an integer, falling back to
    /// `fallback_gb` when the label does not carry one.
    pub fn per_host_gb(&self, fallback_gb: u32) -> u32 {
        self.0
            .split('-')
            .nth(3)
            .and_then(|token| token.parse().ok())
            .unwrap_or(fallback_gb)
    }
}

impl fmt::Display for DesignPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DesignPreset {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Typed inputs to the storage fabric planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerInputs {
    pub design_preset: DesignPreset,
    pub port_speed: PortSpeed,
    pub host_count: u32,
    /// Free-form protocol name, e.g. "NVMe-oF RoCE v2" or "NVMe/TCP".
    pub protocol: String,
    pub oversubscription: OversubscriptionRatio,
    pub traffic_mix: TrafficMix,
    pub latency_tier: LatencyTier,
    pub redundancy: RedundancyMode,
}

impl PlannerInputs {
    /// Whether the protocol names RoCE, selecting the lossless transport
    /// profile. The one intentional substring test in the domain: protocol
    /// names arrive free-form from the caller.
    pub fn is_roce(&self) -> bool {
        self.protocol.to_lowercase().contains("roce")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_mix_parse_display_round_trip() {
        for raw in ["E-W heavy", "N-S heavy", "Balanced"] {
            let mix: TrafficMix = raw.parse().unwrap();
            assert_eq!(mix.to_string(), raw);
        }
        assert!("sideways".parse::<TrafficMix>().is_err());
    }

    #[test]
    fn test_traffic_mix_serde_uses_display_strings() {
        let json = serde_json::to_string(&TrafficMix::NorthSouthHeavy).unwrap();
        assert_eq!(json, "\"N-S heavy\"");

        let mix: TrafficMix = serde_json::from_str("\"E-W heavy\"").unwrap();
        assert_eq!(mix, TrafficMix::EastWestHeavy);
    }

    #[test]
    fn test_latency_and_redundancy_parse() {
        assert_eq!("Ultra-low".parse::<LatencyTier>().unwrap(), LatencyTier::UltraLow);
        assert_eq!(
            "Dual-fabric".parse::<RedundancyMode>().unwrap(),
            RedundancyMode::DualFabric
        );
        assert!("low-ish".parse::<LatencyTier>().is_err());
        assert!("Triple-fabric".parse::<RedundancyMode>().is_err());
    }

    #[test]
    fn test_preset_parses_fourth_token() {
        assert_eq!(DesignPreset::from("2-4-3-200").per_host_gb(200), 200);
        assert_eq!(DesignPreset::from("2-8-3-400").per_host_gb(200), 400);
    }

    #[test]
    fn test_preset_falls_back_when_unparseable() {
        assert_eq!(DesignPreset::from("custom").per_host_gb(200), 200);
        assert_eq!(DesignPreset::from("2-4-3-fast").per_host_gb(200), 200);
        assert_eq!(DesignPreset::from("2-4-3").per_host_gb(200), 200);
    }

    #[test]
    fn test_roce_detection_is_case_insensitive() {
        let mut inputs = sample_inputs();
        assert!(inputs.is_roce());

        inputs.protocol = "nvme-of rocev2".to_string();
        assert!(inputs.is_roce());

        inputs.protocol = "NVMe/TCP".to_string();
        assert!(!inputs.is_roce());
    }

    #[test]
    fn test_inputs_serde_round_trip() {
        let inputs = sample_inputs();
        let json = serde_json::to_string(&inputs).unwrap();
        let back: PlannerInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }

    fn sample_inputs() -> PlannerInputs {
        PlannerInputs {
            design_preset: DesignPreset::from("2-4-3-200"),
            port_speed: PortSpeed::G200,
            host_count: 32,
            protocol: "NVMe-oF RoCE v2".to_string(),
            oversubscription: OversubscriptionRatio::ThreeToOne,
            traffic_mix: TrafficMix::Balanced,
            latency_tier: LatencyTier::Standard,
            redundancy: RedundancyMode::DualFabric,
        }
    }
}
