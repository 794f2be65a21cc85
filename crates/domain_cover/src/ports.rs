//! Cover storage port

use async_trait::async_trait;

use core_kernel::{CoverId, PortError};

use crate::cover::Cover;

/// Document store for covers
///
/// Implementations must not expose partial writes as complete records.
/// Single-entity reads return `None` for missing ids; absence is an
/// expected outcome, not an error.
#[async_trait]
pub trait CoverStore: Send + Sync {
    async fn get(&self, id: CoverId) -> Result<Option<Cover>, PortError>;
    async fn add(&self, cover: &Cover) -> Result<(), PortError>;
    async fn delete(&self, id: CoverId) -> Result<(), PortError>;
    async fn list(&self) -> Result<Vec<Cover>, PortError>;
}
