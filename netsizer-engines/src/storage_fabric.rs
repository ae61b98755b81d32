//! Storage fabric planning engine.
//!
//! Turns a storage sizing request into a buildable fabric recommendation.
//!
//! # What This Engine Does
//!
//! 1. Sizes the port plan: scalable units, host ports per node, per-host and
//!    aggregate bandwidth, leaf ports, and spine uplinks at the requested
//!    oversubscription ratio.
//!
//! 2. Selects the platform class: deep-buffer (7280R3) when the
//!    oversubscription factor exceeds the policy threshold, when traffic is
//!    N-S heavy, or when the latency tier is ultra-low; fixed-buffer
//!    (7050X4) otherwise.
//!
//! 3. Derives topology and traffic-split guidance from the redundancy mode
//!    and traffic mix.
//!
//! 4. Picks the lossless transport profile: the RoCE-tuned branch (PFC on,
//!    conservative ECN, mandatory MTU 9000) when the protocol names RoCE,
//!    the relaxed branch otherwise.
//!
//! 5. Collects validation warnings, in a fixed order, for combinations worth
//!    a second look before quoting.
//!
//! # Inputs
//!
//! - [`PlannerInputs`]: preset label, port speed, host count, protocol,
//!   oversubscription ratio, traffic mix, latency tier, redundancy mode.
//!
//! # Outputs
//!
//! - [`FabricPlan`]: topology, platform selection, port plan, fabric split
//!   guidance, lossless profile, and ordered validation flags.

use crate::parameters::StorageFabricParameters;
use log::debug;
use netsizer_core::fabric::{LatencyTier, PlannerInputs, RedundancyMode, TrafficMix};
use netsizer_core::units::{OversubscriptionRatio, PortSpeed};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Switch platform class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformModel {
    #[serde(rename = "7050X4")]
    Model7050X4,
    #[serde(rename = "7280R3")]
    Model7280R3,
}

impl PlatformModel {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlatformModel::Model7050X4 => "7050X4",
            PlatformModel::Model7280R3 => "7280R3",
        }
    }
}

impl fmt::Display for PlatformModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected platform with its rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformSelection {
    pub model: PlatformModel,
    pub rationale: &'static str,
}

/// Port and uplink sizing for the fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortPlan {
    /// Scalable units of hosts.
    pub su_count: u32,
    pub port_speed_gb: u32,
    pub host_ports_per_node: u32,
    pub per_host_bandwidth_gb: u32,
    pub total_host_bandwidth_gb: u64,
    pub leaf_ports_required: u32,
    pub spine_uplinks_required: u32,
    pub oversubscription: OversubscriptionRatio,
}

/// Lossless transport guidance (PFC / ECN / MTU).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LosslessProfile {
    pub pfc: &'static str,
    pub ecn: &'static str,
    pub mtu: &'static str,
}

const ROCE_PROFILE: LosslessProfile = LosslessProfile {
    pfc: "PFC enabled on the storage priority (lossless class)",
    ecn: "ECN with conservative thresholds tuned for incast",
    mtu: "MTU 9000 end-to-end (mandatory)",
};

const RELAXED_PROFILE: LosslessProfile = LosslessProfile {
    pfc: "PFC optional; TCP transport tolerates loss",
    ecn: "ECN enabled for early congestion signaling",
    mtu: "MTU alignment across fabric recommended",
};

const DEEP_BUFFER_RATIONALE: &str =
    "Deep packet buffers absorb incast and sustained N-S or latency-sensitive flows";
const FIXED_BUFFER_RATIONALE: &str =
    "Fixed-buffer leaf-spine platform suits balanced E-W traffic at moderate oversubscription";

/// Complete fabric recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FabricPlan {
    pub topology: &'static str,
    pub platform: PlatformSelection,
    pub port_plan: PortPlan,
    pub fabric_split: &'static str,
    pub lossless_profile: LosslessProfile,
    /// Warnings in evaluation order; each is independent of the others.
    pub validation_flags: Vec<String>,
}

/// Storage fabric planning engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageFabricPlanner {
    parameters: StorageFabricParameters,
}

impl StorageFabricPlanner {
    /// Create a planner with the default policy parameters.
    pub fn new() -> Self {
        Self::from_parameters(StorageFabricParameters::default())
    }

    /// Create a planner from parameters.
    pub fn from_parameters(parameters: StorageFabricParameters) -> Self {
        Self { parameters }
    }

    /// Get the parameters.
    pub fn parameters(&self) -> &StorageFabricParameters {
        &self.parameters
    }

    /// Compute a fabric plan for the request.
    ///
    /// Pure and deterministic over the typed input domain; a zero host count
    /// propagates through the arithmetic (one scalable unit, one uplink)
    /// rather than failing.
    pub fn plan(&self, inputs: &PlannerInputs) -> FabricPlan {
        let p = &self.parameters;

        let preset_gb = inputs.design_preset.per_host_gb(p.fallback_preset_gb);
        let port_speed_gb = inputs.port_speed.gb();

        let su_count = inputs.host_count.div_ceil(p.hosts_per_su).max(1);

        let base_ports_per_node = match inputs.redundancy {
            RedundancyMode::DualFabric => 2,
            RedundancyMode::SingleFabric => 1,
        };
        // 200G hosts chasing ultra-low latency get a second port to spread
        // queue pressure even without dual fabrics.
        let host_ports_per_node = if inputs.port_speed == PortSpeed::G200
            && inputs.latency_tier == LatencyTier::UltraLow
        {
            base_ports_per_node.max(2)
        } else {
            base_ports_per_node
        };

        let per_host_bandwidth_gb = port_speed_gb * host_ports_per_node;
        let total_host_bandwidth_gb = per_host_bandwidth_gb as u64 * inputs.host_count as u64;
        let leaf_ports_required = inputs.host_count * host_ports_per_node;

        let uplink_factor = inputs.oversubscription.factor();
        let spine_uplinks_required = leaf_ports_required.div_ceil(uplink_factor).max(1);

        let deep_buffer_needed = uplink_factor > p.deep_buffer_oversub_threshold
            || inputs.traffic_mix == TrafficMix::NorthSouthHeavy
            || inputs.latency_tier == LatencyTier::UltraLow;

        let platform = if deep_buffer_needed {
            PlatformSelection {
                model: PlatformModel::Model7280R3,
                rationale: DEEP_BUFFER_RATIONALE,
            }
        } else {
            PlatformSelection {
                model: PlatformModel::Model7050X4,
                rationale: FIXED_BUFFER_RATIONALE,
            }
        };

        let topology = match inputs.redundancy {
            RedundancyMode::DualFabric => "Dual-leaf + spine",
            RedundancyMode::SingleFabric => "Leaf-spine",
        };

        let fabric_split = match inputs.traffic_mix {
            TrafficMix::Balanced => "Split leaf capacity evenly between storage and client traffic",
            TrafficMix::EastWestHeavy => {
                "Bias uplink budget toward east-west replication and rebuild traffic"
            }
            TrafficMix::NorthSouthHeavy => {
                "Reserve spine capacity for north-south client ingest; keep storage east-west on dedicated leaf pairs"
            }
        };

        let lossless_profile = if inputs.is_roce() {
            ROCE_PROFILE
        } else {
            RELAXED_PROFILE
        };

        let mut validation_flags = Vec::new();
        if uplink_factor > p.deep_buffer_oversub_threshold {
            validation_flags.push(format!(
                "Oversubscription > {}:1; deep buffer recommended.",
                p.deep_buffer_oversub_threshold
            ));
        }
        if preset_gb != port_speed_gb {
            validation_flags.push(format!(
                "Preset implies {}G per host; confirm port speed choice.",
                preset_gb
            ));
        }
        if inputs.traffic_mix == TrafficMix::NorthSouthHeavy
            && inputs.redundancy == RedundancyMode::SingleFabric
        {
            validation_flags.push(
                "N-S heavy traffic on a single fabric concentrates failure impact; consider dual fabrics."
                    .to_string(),
            );
        }
        if host_ports_per_node > 1 && inputs.redundancy == RedundancyMode::SingleFabric {
            validation_flags.push(
                "Multiple host ports without dual fabrics; validate LACP/bonding design."
                    .to_string(),
            );
        }

        debug!(
            "planned {} hosts at {}: {} on {}, {} leaf ports, {} spine uplinks, {} flags",
            inputs.host_count,
            inputs.port_speed,
            platform.model,
            topology,
            leaf_ports_required,
            spine_uplinks_required,
            validation_flags.len()
        );

        FabricPlan {
            topology,
            platform,
            port_plan: PortPlan {
                su_count,
                port_speed_gb,
                host_ports_per_node,
                per_host_bandwidth_gb,
                total_host_bandwidth_gb,
                leaf_ports_required,
                spine_uplinks_required,
                oversubscription: inputs.oversubscription,
            },
            fabric_split,
            lossless_profile,
            validation_flags,
        }
    }
}

impl Default for StorageFabricPlanner {
    fn default() -> Self {
        Self::new()
    }
}
