//! Rate type classifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::{AttributeType, Scalar};

/// The kind of exchange rates a provider supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RateType {
    /// Any kind of rate; used in queries that do not care
    Any,
    /// Rates published with a delay
    Deferred,
    /// Rates for a point in the past
    Historic,
    Other,
    /// Rates reflecting the current market
    Realtime,
}

impl RateType {
    pub const ALL: [RateType; 5] = [
        RateType::Any,
        RateType::Deferred,
        RateType::Historic,
        RateType::Other,
        RateType::Realtime,
    ];

    /// Returns the canonical upper-case name
    pub fn code(&self) -> &'static str {
        match self {
            RateType::Any => "ANY",
            RateType::Deferred => "DEFERRED",
            RateType::Historic => "HISTORIC",
            RateType::Other => "OTHER",
            RateType::Realtime => "REALTIME",
        }
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown rate type: {0}")]
pub struct RateTypeParseError(pub String);

impl FromStr for RateType {
    type Err = RateTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RateType::ALL
            .into_iter()
            .find(|rate_type| rate_type.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RateTypeParseError(s.to_string()))
    }
}

impl AttributeType for RateType {
    fn into_scalar(self) -> Scalar {
        Scalar::Text(self.code().to_string())
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Text(value) => value.parse().ok(),
            _ => None,
        }
    }
}
