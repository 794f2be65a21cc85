//! Storage infrastructure
//!
//! Implements the domain storage ports against PostgreSQL using SQLx, plus
//! an in-memory store used throughout the test suites. Queries are bound at
//! runtime so the crate builds without a database; connectivity is verified
//! at startup instead.

pub mod audit;
pub mod claims;
pub mod covers;
pub mod error;
pub mod memory;
pub mod pool;

pub use audit::PgAuditer;
pub use claims::PgClaimStore;
pub use covers::PgCoverStore;
pub use memory::MemoryStore;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
