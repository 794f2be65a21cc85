//! Claim DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{CoverId, Money};
use domain_claims::{Claim, ClaimDraft, ClaimType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub cover_id: Uuid,
    /// When the claim event occurred
    pub created: DateTime<Utc>,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub damage_cost: Decimal,
}

impl CreateClaimRequest {
    pub fn into_draft(self) -> ClaimDraft {
        ClaimDraft {
            cover_id: CoverId::from(self.cover_id),
            created: self.created,
            claim_type: self.claim_type,
            damage_cost: Money::new(self.damage_cost),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Uuid,
    pub cover_id: Uuid,
    pub created: DateTime<Utc>,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub damage_cost: Money,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: Uuid::from(claim.id),
            cover_id: Uuid::from(claim.cover_id),
            created: claim.created,
            claim_type: claim.claim_type,
            damage_cost: claim.damage_cost,
        }
    }
}
