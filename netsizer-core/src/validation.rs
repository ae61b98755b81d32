//! Boundary validation.
//!
//! The engines trust their typed inputs and never fail; everything that can
//! reject a request lives here instead. Callers hand over what a form
//! submits (strings and plain numbers) and get back the typed domain or a
//! [`SizingError`] naming the offending field.

use crate::catalog::{WorkloadProfile, WORKLOADS};
use crate::errors::{SizingError, SizingResult};
use crate::fabric::{DesignPreset, PlannerInputs};
use crate::units::InterfaceSpeed;
use serde::{Deserialize, Serialize};

/// Resolve a workload id string to its catalog entry.
pub fn resolve_workload(id: &str) -> SizingResult<&'static WorkloadProfile> {
    let id = id.trim();
    WORKLOADS
        .iter()
        .find(|profile| profile.id.as_str().eq_ignore_ascii_case(id))
        .ok_or_else(|| SizingError::UnknownWorkload(id.to_string()))
}

/// Parse a numeric interface speed into the closed speed set.
pub fn interface_speed(gbps: u32) -> SizingResult<InterfaceSpeed> {
    InterfaceSpeed::try_from(gbps)
}

/// Reject non-positive counts before they reach the engines.
pub fn positive_count(value: u32, what: &'static str) -> SizingResult<u32> {
    if value == 0 {
        return Err(SizingError::NonPositiveCount { what, value });
    }
    Ok(value)
}

/// A planner request as submitted: all enumerated fields still strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlannerRequest {
    pub design_preset: String,
    pub port_speed: String,
    pub host_count: u32,
    pub protocol: String,
    pub oversubscription: String,
    pub traffic_mix: String,
    pub latency_tier: String,
    pub redundancy: String,
}

impl RawPlannerRequest {
    /// Validate and convert into typed [`PlannerInputs`].
    ///
    /// The protocol field stays free-form; every other field must name a
    /// member of its closed set and the host count must be positive.
    pub fn into_inputs(self) -> SizingResult<PlannerInputs> {
        Ok(PlannerInputs {
            design_preset: DesignPreset::new(self.design_preset),
            port_speed: self.port_speed.parse()?,
            host_count: positive_count(self.host_count, "host count")?,
            protocol: self.protocol,
            oversubscription: self.oversubscription.parse()?,
            traffic_mix: self.traffic_mix.parse()?,
            latency_tier: self.latency_tier.parse()?,
            redundancy: self.redundancy.parse()?,
        })
    }
}
