//! Claim creation validation
//!
//! Checks run in order: the cost ceiling first, then the cover reference,
//! then the date window. The cover read happens only after the cheap local
//! check has passed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_cover::Cover;

use crate::claim::ClaimDraft;
use crate::error::ClaimError;
use crate::ports::CoverLookup;

/// Upper bound on the damage cost of any single claim
pub const MAX_DAMAGE_COST: Decimal = dec!(100000);

/// Validates a claim draft against its referenced cover
///
/// Returns the resolved cover on success so the caller does not need a
/// second read. The claim's `created` timestamp is compared at date
/// granularity, inclusive at both window ends.
pub async fn validate_claim(
    draft: &ClaimDraft,
    covers: &dyn CoverLookup,
) -> Result<Cover, ClaimError> {
    if draft.damage_cost.amount() > MAX_DAMAGE_COST {
        return Err(ClaimError::DamageCostExceedsMaximum);
    }

    let cover = covers
        .cover(draft.cover_id)
        .await?
        .ok_or(ClaimError::CoverNotFound)?;

    if !cover.period.contains(draft.created.date_naive()) {
        return Err(ClaimError::OutsideCoverPeriod);
    }

    Ok(cover)
}
