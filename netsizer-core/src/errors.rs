use thiserror::Error;

/// Error type for boundary validation and parameter loading.
///
/// The engines themselves are total functions and never fail; every variant
/// here is produced while turning raw caller input (form fields, config
/// files) into the typed domain the engines consume.
#[derive(Error, Debug)]
pub enum SizingError {
    #[error("unknown workload id '{0}'")]
    UnknownWorkload(String),
    #[error("unsupported interface speed: {0} Gbps (expected 10, 25, 100, or 400)")]
    UnsupportedInterfaceSpeed(u32),
    #[error("unsupported port speed '{0}' (expected 200G or 400G)")]
    UnsupportedPortSpeed(String),
    #[error("invalid oversubscription ratio '{0}' (expected 1:1, 2:1, or 3:1)")]
    InvalidOversubscription(String),
    #[error("unknown traffic mix '{0}' (expected E-W heavy, N-S heavy, or Balanced)")]
    UnknownTrafficMix(String),
    #[error("unknown latency tier '{0}' (expected Standard or Ultra-low)")]
    UnknownLatencyTier(String),
    #[error("unknown redundancy mode '{0}' (expected Dual-fabric or Single-fabric)")]
    UnknownRedundancy(String),
    #[error("{what} must be at least 1, got {value}")]
    NonPositiveCount { what: &'static str, value: u32 },
    #[error("invalid parameter overrides: {0}")]
    InvalidParameters(String),
}

/// Convenience type for `Result<T, SizingError>`.
pub type SizingResult<T> = Result<T, SizingError>;
