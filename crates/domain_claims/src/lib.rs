//! Claims domain
//!
//! A `Claim` requests payout against an existing cover. Creation is gated by
//! a cost ceiling and by the referenced cover's date window; the reference is
//! checked only at creation time, so deleting a cover later does not cascade.

pub mod claim;
pub mod error;
pub mod ports;
pub mod service;
pub mod validate;

pub use claim::{Claim, ClaimDraft, ClaimType, ParseClaimTypeError};
pub use error::ClaimError;
pub use ports::{ClaimStore, CoverLookup};
pub use service::ClaimService;
pub use validate::{validate_claim, MAX_DAMAGE_COST};
