//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::{ClaimId, CoverId, Money};

/// Kind of loss event a claim reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    Collision,
    Grounding,
    BadWeather,
    Fire,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Collision => "Collision",
            ClaimType::Grounding => "Grounding",
            ClaimType::BadWeather => "BadWeather",
            ClaimType::Fire => "Fire",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored claim type token is unknown
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown claim type: {0}")]
pub struct ParseClaimTypeError(pub String);

impl FromStr for ClaimType {
    type Err = ParseClaimTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Collision" => Ok(ClaimType::Collision),
            "Grounding" => Ok(ClaimType::Grounding),
            "BadWeather" => Ok(ClaimType::BadWeather),
            "Fire" => Ok(ClaimType::Fire),
            other => Err(ParseClaimTypeError(other.to_string())),
        }
    }
}

/// A claim against a cover
///
/// `cover_id` is a non-owning reference; referential integrity is checked
/// at creation only. Immutable once stored; deletable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned by the system at creation
    pub id: ClaimId,
    /// The cover this claim is made against
    pub cover_id: CoverId,
    /// When the claim event occurred (not when the record was created);
    /// its date part must fall inside the cover window
    pub created: DateTime<Utc>,
    /// Kind of loss
    pub claim_type: ClaimType,
    /// Claimed damage cost
    pub damage_cost: Money,
}

/// Client-supplied fields for a new claim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub cover_id: CoverId,
    pub created: DateTime<Utc>,
    pub claim_type: ClaimType,
    pub damage_cost: Money,
}
