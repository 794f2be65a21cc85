//! Cover DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{CoverPeriod, Money};
use domain_cover::{Cover, CoverDraft, CoverType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoverRequest {
    #[serde(rename = "type")]
    pub cover_type: CoverType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Accepted for wire compatibility; the system always recomputes the
    /// premium, so this value is discarded
    #[serde(default)]
    pub premium: Option<Decimal>,
}

impl CreateCoverRequest {
    pub fn into_draft(self) -> CoverDraft {
        CoverDraft {
            cover_type: self.cover_type,
            period: CoverPeriod::new(self.start_date, self.end_date),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub cover_type: CoverType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium: Money,
}

impl From<Cover> for CoverResponse {
    fn from(cover: Cover) -> Self {
        Self {
            id: Uuid::from(cover.id),
            cover_type: cover.cover_type,
            start_date: cover.period.start_date,
            end_date: cover.period.end_date,
            premium: cover.premium,
        }
    }
}

/// Query parameters for the premium quote endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputePremiumParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cover_type: CoverType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PremiumQuoteResponse {
    pub premium: Money,
}
