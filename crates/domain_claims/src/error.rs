//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the claims domain
///
/// A missing referenced cover is a validation failure here, not a lookup
/// error: the claim request named a cover that does not exist.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("damage cost exceeds maximum")]
    DamageCostExceedsMaximum,

    #[error("referenced cover does not exist")]
    CoverNotFound,

    #[error("claim created outside cover period")]
    OutsideCoverPeriod,

    #[error(transparent)]
    Store(#[from] PortError),
}

impl ClaimError {
    /// Returns true for rejections of the request itself, as opposed to
    /// infrastructure failures
    pub fn is_validation(&self) -> bool {
        !matches!(self, ClaimError::Store(_))
    }
}
