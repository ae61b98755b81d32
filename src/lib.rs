//! Deterministic sizing engines for presales network and storage fabric
//! planning.
//!
//! This facade re-exports the two engines and their domain vocabulary:
//!
//! - [`LifeSciencesSizer`]: bandwidth, burst, deep-buffer, and optic
//!   estimates for laboratory instrument fleets.
//! - [`StorageFabricPlanner`]: topology, platform, port-plan, lossless
//!   transport, and validation guidance for storage fabrics.
//!
//! Raw form input enters through [`validation`], which rejects anything
//! outside the closed input domain before it reaches an engine.
//!
//! ```
//! use netsizer::validation;
//! use netsizer::{InterfaceSpeed, LifeSciencesSizer};
//!
//! let workload = validation::resolve_workload("genomics")?;
//! let estimate = LifeSciencesSizer::new().estimate(workload, 6, 80, InterfaceSpeed::Gbps25);
//! assert_eq!(estimate.total_gbps, 7.2);
//! # Ok::<(), netsizer::SizingError>(())
//! ```

pub use netsizer_core::catalog::{
    self, select_optic, workload, OpticRule, WorkloadDefaults, WorkloadId, WorkloadProfile,
    OPTIC_RULES, WORKLOADS,
};
pub use netsizer_core::errors::{SizingError, SizingResult};
pub use netsizer_core::fabric::{
    DesignPreset, LatencyTier, PlannerInputs, RedundancyMode, TrafficMix,
};
pub use netsizer_core::units::{round2, InterfaceSpeed, OversubscriptionRatio, PortSpeed};
pub use netsizer_core::validation;
pub use netsizer_core::validation::RawPlannerRequest;
pub use netsizer_engines::{
    FabricPlan, LifeSciencesParameters, LifeSciencesSizer, LosslessProfile, PlatformModel,
    PlatformSelection, PortPlan, SizingEstimate, StorageFabricParameters, StorageFabricPlanner,
};
