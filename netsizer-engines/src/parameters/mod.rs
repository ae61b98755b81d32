//! Engine parameters.
//!
//! Each engine has a parameter struct whose `Default` impl carries the fixed
//! policy values the engines ship with. Overrides deserialize from TOML;
//! omitted fields keep their defaults.

mod life_sciences;
mod storage_fabric;

pub use life_sciences::LifeSciencesParameters;
pub use storage_fabric::StorageFabricParameters;

use netsizer_core::errors::{SizingError, SizingResult};

pub(crate) fn from_toml<T: serde::de::DeserializeOwned>(raw: &str) -> SizingResult<T> {
    toml::from_str(raw).map_err(|e| SizingError::InvalidParameters(e.to_string()))
}
