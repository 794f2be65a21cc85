//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the marine cover test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built dates and entities for common scenarios
//! - `builders`: Builder patterns for cover and claim test data
//! - `audit`: A capturing audit sink for asserting on audit events

pub mod audit;
pub mod builders;
pub mod fixtures;

pub use audit::{AuditedEntity, RecordedAudit, RecordingAuditer};
pub use builders::{ClaimDraftBuilder, CoverDraftBuilder};
pub use fixtures::*;
