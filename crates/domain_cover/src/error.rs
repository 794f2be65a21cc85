//! Cover domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the cover domain
///
/// The validation variants carry the exact reason strings surfaced to
/// clients; `Store` wraps infrastructure failures unchanged.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("start date is in the past")]
    StartDateInPast,

    #[error("end date precedes start date")]
    EndBeforeStart,

    #[error("insurance period exceeds one year")]
    PeriodExceedsOneYear,

    #[error(transparent)]
    Store(#[from] PortError),
}

impl CoverError {
    /// Returns true for rejections of the request itself, as opposed to
    /// infrastructure failures
    pub fn is_validation(&self) -> bool {
        !matches!(self, CoverError::Store(_))
    }
}
