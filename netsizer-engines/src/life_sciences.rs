//! Life-sciences network sizing engine.
//!
//! Estimates the aggregate network demand of a fleet of laboratory
//! instruments and picks an optic for the cable run:
//!
//! $$ total = N \cdot base \qquad burst = total \cdot multiplier $$
//!
//! where $N$ is the instrument count and $base$/$multiplier$ come from the
//! workload's catalog entry. Deep-buffer switching is recommended when the
//! burst estimate crosses the policy threshold, and always for cryo-EM,
//! whose movie-stack transfers are bursty beyond what the multiplier
//! captures.
//!
//! The engine is total arithmetic over its inputs: a zero instrument count
//! produces a degenerate but well-defined estimate rather than an error.
//! Rejecting such input is the boundary layer's job.

use crate::parameters::LifeSciencesParameters;
use log::debug;
use netsizer_core::catalog::{select_optic, OpticRule, WorkloadId, WorkloadProfile};
use netsizer_core::units::{round2, InterfaceSpeed};
use serde::Serialize;

/// Sizing estimate for one workload configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingEstimate {
    pub workload: &'static WorkloadProfile,
    /// Aggregate sustained throughput, rounded to 2 decimals.
    pub total_gbps: f64,
    /// Aggregate burst throughput, rounded to 2 decimals.
    pub burst_gbps: f64,
    pub recommends_deep_buffers: bool,
    pub optic: &'static OpticRule,
    pub breakout_note: String,
}

/// Life-sciences network sizing engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeSciencesSizer {
    parameters: LifeSciencesParameters,
}

impl LifeSciencesSizer {
    /// Create a sizer with the default policy parameters.
    pub fn new() -> Self {
        Self::from_parameters(LifeSciencesParameters::default())
    }

    /// Create a sizer from parameters.
    pub fn from_parameters(parameters: LifeSciencesParameters) -> Self {
        Self { parameters }
    }

    /// Get the parameters.
    pub fn parameters(&self) -> &LifeSciencesParameters {
        &self.parameters
    }

    /// Estimate network demand for `instruments` units of `workload` at the
    /// given cable distance and interface speed.
    ///
    /// Deterministic and total: identical inputs give identical estimates,
    /// and no input combination fails.
    pub fn estimate(
        &self,
        workload: &'static WorkloadProfile,
        instruments: u32,
        distance_m: u32,
        interface_speed: InterfaceSpeed,
    ) -> SizingEstimate {
        let total_gbps = round2(instruments as f64 * workload.base_gbps_per_instrument);
        let burst_gbps = round2(total_gbps * workload.burst_multiplier);

        let recommends_deep_buffers = burst_gbps > self.parameters.deep_buffer_threshold_gbps
            || workload.id == WorkloadId::CryoEm;

        let optic = select_optic(distance_m, interface_speed);
        let breakout_note = match optic.breakout {
            Some(breakout) => format!(
                "Safe breakouts: {}. Ensure optics support breakout on chosen platform.",
                breakout
            ),
            None => "No breakout guidance for this optic.".to_string(),
        };

        debug!(
            "sized {}: {} instruments -> {} Gbps sustained, {} Gbps burst, optic {}",
            workload.id, instruments, total_gbps, burst_gbps, optic.id
        );

        SizingEstimate {
            workload,
            total_gbps,
            burst_gbps,
            recommends_deep_buffers,
            optic,
            breakout_note,
        }
    }
}

impl Default for LifeSciencesSizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsizer_core::catalog::workload;

    #[test]
    fn test_genomics_fleet_estimate() {
        let sizer = LifeSciencesSizer::new();
        let estimate = sizer.estimate(
            workload(WorkloadId::Genomics),
            6,
            80,
            InterfaceSpeed::Gbps25,
        );

        assert_eq!(estimate.total_gbps, 7.2);
        assert_eq!(estimate.burst_gbps, 11.52);
        assert!(estimate.recommends_deep_buffers, "burst above threshold");
        assert_eq!(estimate.optic.id, "sr");
    }

    #[test]
    fn test_cryoem_fleet_estimate() {
        let sizer = LifeSciencesSizer::new();
        let estimate = sizer.estimate(
            workload(WorkloadId::CryoEm),
            3,
            120,
            InterfaceSpeed::Gbps100,
        );

        assert_eq!(estimate.total_gbps, 24.0);
        assert_eq!(estimate.burst_gbps, 48.0);
        assert!(estimate.recommends_deep_buffers);
        assert_eq!(estimate.optic.id, "dr");
    }

    #[test]
    fn test_small_genomics_fleet_stays_below_threshold() {
        let sizer = LifeSciencesSizer::new();
        // 5 instruments: total 6.0, burst 9.6 <= 10
        let estimate = sizer.estimate(
            workload(WorkloadId::Genomics),
            5,
            80,
            InterfaceSpeed::Gbps25,
        );

        assert_eq!(estimate.burst_gbps, 9.6);
        assert!(!estimate.recommends_deep_buffers);
    }

    #[test]
    fn test_cryoem_recommended_even_below_threshold() {
        // Raise the threshold far above any cryo-EM burst; the workload
        // itself still forces the recommendation.
        let sizer = LifeSciencesSizer::from_parameters(LifeSciencesParameters {
            deep_buffer_threshold_gbps: 1_000.0,
        });
        let estimate = sizer.estimate(
            workload(WorkloadId::CryoEm),
            1,
            50,
            InterfaceSpeed::Gbps100,
        );

        assert!(estimate.burst_gbps <= 1_000.0);
        assert!(estimate.recommends_deep_buffers);
    }

    #[test]
    fn test_pathology_rounding() {
        let sizer = LifeSciencesSizer::new();
        let estimate = sizer.estimate(
            workload(WorkloadId::Pathology),
            3,
            60,
            InterfaceSpeed::Gbps10,
        );

        // 3 * 0.4 accumulates binary rounding error before display rounding.
        assert_eq!(estimate.total_gbps, 1.2);
        assert_eq!(estimate.burst_gbps, 3.0);
        assert!(!estimate.recommends_deep_buffers);
    }

    #[test]
    fn test_zero_instruments_degenerate_but_defined() {
        let sizer = LifeSciencesSizer::new();
        let estimate = sizer.estimate(
            workload(WorkloadId::Genomics),
            0,
            80,
            InterfaceSpeed::Gbps25,
        );

        assert_eq!(estimate.total_gbps, 0.0);
        assert_eq!(estimate.burst_gbps, 0.0);
        assert!(!estimate.recommends_deep_buffers);
    }

    #[test]
    fn test_breakout_note_for_sr() {
        let sizer = LifeSciencesSizer::new();
        let estimate = sizer.estimate(
            workload(WorkloadId::Genomics),
            6,
            80,
            InterfaceSpeed::Gbps25,
        );

        assert_eq!(
            estimate.breakout_note,
            "Safe breakouts: 4x25G from 100G-SR4. Ensure optics support breakout on chosen platform."
        );
    }

    #[test]
    fn test_no_breakout_note_for_lr() {
        let sizer = LifeSciencesSizer::new();
        let estimate = sizer.estimate(
            workload(WorkloadId::Genomics),
            6,
            2_000,
            InterfaceSpeed::Gbps25,
        );

        assert_eq!(estimate.optic.id, "lr");
        assert_eq!(estimate.breakout_note, "No breakout guidance for this optic.");
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let sizer = LifeSciencesSizer::new();
        let first = sizer.estimate(workload(WorkloadId::CryoEm), 3, 120, InterfaceSpeed::Gbps100);
        let second = sizer.estimate(workload(WorkloadId::CryoEm), 3, 120, InterfaceSpeed::Gbps100);
        assert_eq!(first, second);
    }
}
