use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Exact international mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// Unit an altitude is given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Km,
    Mi,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Km => "km",
            Unit::Mi => "mi",
        }
    }

    /// Normalize `value` expressed in this unit to kilometers.
    pub fn to_km(self, value: f64) -> f64 {
        match self {
            Unit::Km => value,
            Unit::Mi => miles_to_km(value),
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km" => Ok(Unit::Km),
            "mi" => Ok(Unit::Mi),
            other => Err(Error::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Convert `value` given in `unit` ("km" or "mi") to kilometers.
pub fn to_km(value: f64, unit: &str) -> Result<f64, Error> {
    Ok(unit.parse::<Unit>()?.to_km(value))
}
