//! Core Kernel - Foundational types and utilities for the marine cover system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic
//! - Coverage period handling with day-number semantics
//! - Strongly-typed identifiers
//! - Shared collaborator ports (audit sink, port errors)

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use identifiers::{AuditEventId, ClaimId, CoverId};
pub use money::Money;
pub use ports::{AuditVerb, Auditer, PortError};
pub use temporal::CoverPeriod;
