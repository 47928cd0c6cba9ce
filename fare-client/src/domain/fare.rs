//! Fare calculation wire types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Location;

/// Error returned when parsing an invalid bus type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus type (expected \"nonAC\" or \"AC\")")]
pub struct InvalidBusType;

/// Bus category, which determines the base rate.
///
/// Wire representation matches the fare service: `"nonAC"` and `"AC"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusType {
    #[default]
    #[serde(rename = "nonAC")]
    NonAc,
    #[serde(rename = "AC")]
    Ac,
}

impl BusType {
    /// Returns the wire string for this bus type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusType::NonAc => "nonAC",
            BusType::Ac => "AC",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusType {
    type Err = InvalidBusType;

    /// Parse a bus type, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nonac" => Ok(BusType::NonAc),
            "ac" => Ok(BusType::Ac),
            _ => Err(InvalidBusType),
        }
    }
}

/// Error returned when parsing an invalid discount type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid discount type (expected \"none\", \"student\" or \"pass\")")]
pub struct InvalidDiscountType;

/// Discount class applied by the fare service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    None,
    Student,
    Pass,
}

impl DiscountType {
    /// Returns the wire string for this discount type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::None => "none",
            DiscountType::Student => "student",
            DiscountType::Pass => "pass",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountType {
    type Err = InvalidDiscountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(DiscountType::None),
            "student" => Ok(DiscountType::Student),
            "pass" => Ok(DiscountType::Pass),
            _ => Err(InvalidDiscountType),
        }
    }
}

/// Language preference for location search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    /// Returns the wire string for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for `POST /calculate-fare`.
///
/// Either `distance` is set (distance mode), or the two locations carry a
/// real route (locations mode); the server computes the distance itself in
/// the latter case. Both location slots are always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRequest {
    pub start_location: Location,
    pub end_location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub bus_type: BusType,
    pub discount_type: DiscountType,
}

/// Response body of `POST /calculate-fare`.
///
/// A display payload; the server is trusted, no invariants are enforced
/// on it client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareResponse {
    pub fare: f64,
    pub distance: f64,
    pub bus_type: String,
    pub discount_applied: String,
    pub base_rate: f64,
    pub discount_percentage: f64,
}
