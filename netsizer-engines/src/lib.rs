//! Sizing engines for presales fabric planning.
//!
//! Two independent, deterministic engines:
//!
//! - [`life_sciences`]: maps an instrument workload profile to aggregate and
//!   burst bandwidth estimates, a deep-buffer recommendation, and an optic
//!   selection.
//! - [`storage_fabric`]: maps a storage sizing request to a topology,
//!   platform class, port/uplink plan, traffic-split guidance, lossless
//!   transport profile, and validation warnings.
//!
//! Both are pure functions over their typed inputs: no I/O, no hidden state,
//! identical inputs always produce identical outputs. Input validation lives
//! upstream in `netsizer-core::validation`; the engines never fail.
//!
//! # Parameters
//!
//! Each engine has an associated parameters struct in the [`parameters`]
//! module whose defaults carry the fixed policy values (deep-buffer
//! thresholds, hosts per scalable unit). Overrides can be loaded from TOML
//! for what-if exploration.

pub mod life_sciences;
pub mod parameters;
pub mod storage_fabric;

pub use life_sciences::{LifeSciencesSizer, SizingEstimate};
pub use parameters::{LifeSciencesParameters, StorageFabricParameters};
pub use storage_fabric::{
    FabricPlan, LosslessProfile, PlatformModel, PlatformSelection, PortPlan, StorageFabricPlanner,
};
