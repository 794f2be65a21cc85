//! Cover aggregate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::{CoverId, CoverPeriod, Money};

use crate::premium::RateSchedule;

/// Vessel class an insured cover applies to
///
/// The class determines the rate schedule used when pricing the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverType {
    Yacht,
    PassengerShip,
    Tanker,
    ContainerShip,
    BulkCarrier,
}

impl CoverType {
    /// Rate schedule for this vessel class
    ///
    /// Yachts carry a lower base multiplier but steeper long-duration
    /// discounts than the commercial classes.
    pub fn rate_schedule(&self) -> RateSchedule {
        use rust_decimal_macros::dec;

        match self {
            CoverType::Yacht => RateSchedule::new(dec!(1.1), dec!(0.05), dec!(0.08)),
            CoverType::PassengerShip => RateSchedule::new(dec!(1.2), dec!(0.02), dec!(0.03)),
            CoverType::Tanker => RateSchedule::new(dec!(1.5), dec!(0.02), dec!(0.03)),
            CoverType::ContainerShip | CoverType::BulkCarrier => {
                RateSchedule::new(dec!(1.3), dec!(0.02), dec!(0.03))
            }
        }
    }

    /// All vessel classes, for exhaustive tests
    pub const ALL: [CoverType; 5] = [
        CoverType::Yacht,
        CoverType::PassengerShip,
        CoverType::Tanker,
        CoverType::ContainerShip,
        CoverType::BulkCarrier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverType::Yacht => "Yacht",
            CoverType::PassengerShip => "PassengerShip",
            CoverType::Tanker => "Tanker",
            CoverType::ContainerShip => "ContainerShip",
            CoverType::BulkCarrier => "BulkCarrier",
        }
    }
}

impl fmt::Display for CoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored vessel class token is unknown
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown cover type: {0}")]
pub struct ParseCoverTypeError(pub String);

impl FromStr for CoverType {
    type Err = ParseCoverTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yacht" => Ok(CoverType::Yacht),
            "PassengerShip" => Ok(CoverType::PassengerShip),
            "Tanker" => Ok(CoverType::Tanker),
            "ContainerShip" => Ok(CoverType::ContainerShip),
            "BulkCarrier" => Ok(CoverType::BulkCarrier),
            other => Err(ParseCoverTypeError(other.to_string())),
        }
    }
}

/// An issued cover
///
/// Immutable once stored; there is no update operation, only deletion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cover {
    /// Unique identifier, assigned by the system at creation
    pub id: CoverId,
    /// Vessel class
    pub cover_type: CoverType,
    /// Coverage window
    #[serde(flatten)]
    pub period: CoverPeriod,
    /// Premium, computed at creation; client-supplied values are discarded
    pub premium: Money,
}

/// Client-supplied fields for a new cover
///
/// Carries no id and no premium: both are assigned by the service, so a
/// client cannot influence either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverDraft {
    pub cover_type: CoverType,
    pub period: CoverPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_type_round_trips_through_str() {
        for cover_type in CoverType::ALL {
            let parsed: CoverType = cover_type.as_str().parse().unwrap();
            assert_eq!(parsed, cover_type);
        }
    }

    #[test]
    fn test_unknown_cover_type_is_rejected() {
        let err = "Rowboat".parse::<CoverType>().unwrap_err();
        assert_eq!(err, ParseCoverTypeError("Rowboat".to_string()));
    }

    #[test]
    fn test_container_and_bulk_share_schedule() {
        assert_eq!(
            CoverType::ContainerShip.rate_schedule(),
            CoverType::BulkCarrier.rate_schedule()
        );
    }
}
