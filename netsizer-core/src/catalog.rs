//! Static catalogs backing the life-sciences sizing engine.
//!
//! Two read-only tables, fixed at compile time:
//!
//! - [`WORKLOADS`]: the instrument workload profiles (genomics, cryo-EM,
//!   digital pathology) with their per-instrument throughput figures and the
//!   defaults the consuming tools pre-fill forms with.
//! - [`OPTIC_RULES`]: optic reach classes evaluated in declared order, from
//!   shortest to longest reach.
//!
//! Catalog entries are plain `&'static` data; nothing here is mutated at
//! runtime and lookups never allocate.

use crate::units::InterfaceSpeed;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a workload profile in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadId {
    Genomics,
    CryoEm,
    Pathology,
}

impl WorkloadId {
    pub const fn as_str(self) -> &'static str {
        match self {
            WorkloadId::Genomics => "genomics",
            WorkloadId::CryoEm => "cryoem",
            WorkloadId::Pathology => "pathology",
        }
    }
}

impl fmt::Display for WorkloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form defaults associated with a workload profile.
///
/// These seed the sizing form in the consuming tool; the engine itself only
/// reads the throughput figures on [`WorkloadProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkloadDefaults {
    pub instruments: u32,
    pub distance_m: u32,
    pub interface_speed: InterfaceSpeed,
    pub hours_per_day: u32,
    pub redundancy: &'static str,
}

/// A workload profile: throughput characteristics of one instrument class.
///
/// `base_gbps_per_instrument` is the average sustained throughput of a single
/// instrument; `burst_multiplier` is the ratio of burst to average. Both are
/// fixed per workload id and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkloadProfile {
    pub id: WorkloadId,
    pub name: &'static str,
    pub description: &'static str,
    pub defaults: WorkloadDefaults,
    pub base_gbps_per_instrument: f64,
    pub burst_multiplier: f64,
}

/// The workload catalog, indexed by [`WorkloadId`] declaration order.
pub static WORKLOADS: [WorkloadProfile; 3] = [
    WorkloadProfile {
        id: WorkloadId::Genomics,
        name: "Genomics sequencing",
        description: "High-throughput sequencers streaming base calls to shared scratch storage",
        defaults: WorkloadDefaults {
            instruments: 6,
            distance_m: 80,
            interface_speed: InterfaceSpeed::Gbps25,
            hours_per_day: 16,
            redundancy: "Dual-homed leaf pair",
        },
        base_gbps_per_instrument: 1.2,
        burst_multiplier: 1.6,
    },
    WorkloadProfile {
        id: WorkloadId::CryoEm,
        name: "Cryo-EM imaging",
        description: "Electron microscopes producing sustained multi-gigabit movie stacks",
        defaults: WorkloadDefaults {
            instruments: 3,
            distance_m: 120,
            interface_speed: InterfaceSpeed::Gbps100,
            hours_per_day: 24,
            redundancy: "Dual-homed leaf pair",
        },
        base_gbps_per_instrument: 8.0,
        burst_multiplier: 2.0,
    },
    WorkloadProfile {
        id: WorkloadId::Pathology,
        name: "Digital pathology scanning",
        description: "Slide scanners uploading whole-slide images in bursts between scans",
        defaults: WorkloadDefaults {
            instruments: 10,
            distance_m: 60,
            interface_speed: InterfaceSpeed::Gbps10,
            hours_per_day: 8,
            redundancy: "Single-homed",
        },
        base_gbps_per_instrument: 0.4,
        burst_multiplier: 2.5,
    },
];

/// Look up a workload profile by id.
pub fn workload(id: WorkloadId) -> &'static WorkloadProfile {
    match id {
        WorkloadId::Genomics => &WORKLOADS[0],
        WorkloadId::CryoEm => &WORKLOADS[1],
        WorkloadId::Pathology => &WORKLOADS[2],
    }
}

/// An optic reach class with the interface speeds it can serve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpticRule {
    pub id: &'static str,
    pub label: &'static str,
    /// Maximum supported cable run in metres.
    pub distance_max_m: u32,
    pub speeds: &'static [InterfaceSpeed],
    /// Supported breakout pattern, where the optic class has one.
    pub breakout: Option<&'static str>,
}

impl OpticRule {
    /// Whether this optic covers the requested distance at the requested speed.
    pub fn supports(&self, distance_m: u32, speed: InterfaceSpeed) -> bool {
        distance_m <= self.distance_max_m && self.speeds.contains(&speed)
    }
}

/// Optic classes in selection order, shortest reach first.
///
/// The last entry doubles as the fallback when no rule covers a request.
pub static OPTIC_RULES: [OpticRule; 3] = [
    OpticRule {
        id: "sr",
        label: "SR (short reach, multimode)",
        distance_max_m: 100,
        speeds: &[
            InterfaceSpeed::Gbps10,
            InterfaceSpeed::Gbps25,
            InterfaceSpeed::Gbps100,
        ],
        breakout: Some("4x25G from 100G-SR4"),
    },
    OpticRule {
        id: "dr",
        label: "DR (500 m single-mode)",
        distance_max_m: 500,
        speeds: &[InterfaceSpeed::Gbps100],
        breakout: Some("4x100G from 400G-DR4"),
    },
    OpticRule {
        id: "lr",
        label: "LR (long reach, single-mode)",
        distance_max_m: 10_000,
        speeds: &[
            InterfaceSpeed::Gbps10,
            InterfaceSpeed::Gbps25,
            InterfaceSpeed::Gbps100,
            InterfaceSpeed::Gbps400,
        ],
        breakout: None,
    },
];

/// Select the optic for a cable run.
///
/// First-match scan over [`OPTIC_RULES`] in declared order; a rule matches
/// when its reach covers the distance and its speed set contains the
/// requested speed. When nothing matches, the longest-reach rule is returned
/// rather than an error, so every distance/speed combination resolves to an
/// optic.
pub fn select_optic(distance_m: u32, speed: InterfaceSpeed) -> &'static OpticRule {
    if let Some(rule) = OPTIC_RULES.iter().find(|rule| rule.supports(distance_m, speed)) {
        return rule;
    }

    let fallback = &OPTIC_RULES[OPTIC_RULES.len() - 1];
    warn!(
        "no optic rule covers {} m at {}; falling back to {}",
        distance_m, speed, fallback.label
    );
    fallback
}
