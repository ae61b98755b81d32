//! Interface and fabric rate vocabulary.
//!
//! Every speed and ratio a caller can request is a closed set, so each is an
//! enum rather than a bare number. The numeric views ([`InterfaceSpeed::gbps`],
//! [`PortSpeed::gb`], [`OversubscriptionRatio::factor`]) are what the engines
//! compute with; the enums themselves are what crosses the API boundary.

use crate::errors::SizingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host-facing interface speed for instrument connectivity.
///
/// Serialized as the plain Gbps number (e.g. `25`), matching how the
/// consuming tools express speeds in their request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum InterfaceSpeed {
    Gbps10,
    Gbps25,
    Gbps100,
    Gbps400,
}

impl InterfaceSpeed {
    /// Numeric rate in Gbps.
    pub const fn gbps(self) -> u32 {
        match self {
            InterfaceSpeed::Gbps10 => 10,
            InterfaceSpeed::Gbps25 => 25,
            InterfaceSpeed::Gbps100 => 100,
            InterfaceSpeed::Gbps400 => 400,
        }
    }
}

impl TryFrom<u32> for InterfaceSpeed {
    type Error = SizingError;

    fn try_from(gbps: u32) -> Result<Self, Self::Error> {
        match gbps {
            10 => Ok(InterfaceSpeed::Gbps10),
            25 => Ok(InterfaceSpeed::Gbps25),
            100 => Ok(InterfaceSpeed::Gbps100),
            400 => Ok(InterfaceSpeed::Gbps400),
            other => Err(SizingError::UnsupportedInterfaceSpeed(other)),
        }
    }
}

impl From<InterfaceSpeed> for u32 {
    fn from(speed: InterfaceSpeed) -> u32 {
        speed.gbps()
    }
}

impl fmt::Display for InterfaceSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Gbps", self.gbps())
    }
}

/// Switch port speed offered by the storage fabric platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortSpeed {
    #[serde(rename = "200G")]
    G200,
    #[serde(rename = "400G")]
    G400,
}

impl PortSpeed {
    /// Numeric rate in Gb.
    pub const fn gb(self) -> u32 {
        match self {
            PortSpeed::G200 => 200,
            PortSpeed::G400 => 400,
        }
    }
}

impl FromStr for PortSpeed {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "200G" => Ok(PortSpeed::G200),
            "400G" => Ok(PortSpeed::G400),
            other => Err(SizingError::UnsupportedPortSpeed(other.to_string())),
        }
    }
}

impl fmt::Display for PortSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}G", self.gb())
    }
}

/// Leaf-to-spine oversubscription ratio.
///
/// The left-hand numeral is the uplink contention factor used when sizing
/// spine uplinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OversubscriptionRatio {
    #[serde(rename = "1:1")]
    OneToOne,
    #[serde(rename = "2:1")]
    TwoToOne,
    #[serde(rename = "3:1")]
    ThreeToOne,
}

impl OversubscriptionRatio {
    /// Uplink contention factor (the left-hand numeral of the ratio).
    pub const fn factor(self) -> u32 {
        match self {
            OversubscriptionRatio::OneToOne => 1,
            OversubscriptionRatio::TwoToOne => 2,
            OversubscriptionRatio::ThreeToOne => 3,
        }
    }
}

impl FromStr for OversubscriptionRatio {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1:1" => Ok(OversubscriptionRatio::OneToOne),
            "2:1" => Ok(OversubscriptionRatio::TwoToOne),
            "3:1" => Ok(OversubscriptionRatio::ThreeToOne),
            other => Err(SizingError::InvalidOversubscription(other.to_string())),
        }
    }
}

impl fmt::Display for OversubscriptionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:1", self.factor())
    }
}

/// Round to two decimal places for display stability.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
