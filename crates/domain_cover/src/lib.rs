//! Cover domain
//!
//! A `Cover` insures one vessel over a calendar date range. The premium is
//! priced by a tiered daily-rate schedule keyed on the vessel class, and
//! creation is gated by temporal validation rules. Persistence and auditing
//! are collaborator ports injected into the service.

pub mod cover;
pub mod error;
pub mod ports;
pub mod premium;
pub mod service;
pub mod validate;

pub use cover::{Cover, CoverDraft, CoverType, ParseCoverTypeError};
pub use error::CoverError;
pub use ports::CoverStore;
pub use premium::{compute_premium, RateSchedule, BASE_DAILY_RATE, MAX_COVERED_DAYS};
pub use service::CoverService;
pub use validate::validate_cover;
