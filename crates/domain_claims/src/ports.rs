//! Claim storage and cover lookup ports

use async_trait::async_trait;

use core_kernel::{ClaimId, CoverId, PortError};
use domain_cover::Cover;

use crate::claim::Claim;

/// Document store for claims
#[async_trait]
pub trait ClaimStore: Send + Sync {
    async fn get(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;
    async fn add(&self, claim: &Claim) -> Result<(), PortError>;
    async fn delete(&self, id: ClaimId) -> Result<(), PortError>;
    async fn list(&self) -> Result<Vec<Claim>, PortError>;
}

/// Read access to covers, as needed by claim validation
///
/// Kept separate from the full cover store so the claims domain only
/// depends on the one read it performs.
#[async_trait]
pub trait CoverLookup: Send + Sync {
    async fn cover(&self, id: CoverId) -> Result<Option<Cover>, PortError>;
}
