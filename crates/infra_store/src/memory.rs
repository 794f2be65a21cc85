//! In-memory store
//!
//! Backs every port with `HashMap`s behind async locks. Used by the test
//! suites and useful for running the API without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{ClaimId, CoverId, PortError};
use domain_claims::{Claim, ClaimStore, CoverLookup};
use domain_cover::{Cover, CoverStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    covers: RwLock<HashMap<CoverId, Cover>>,
    claims: RwLock<HashMap<ClaimId, Claim>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CoverStore for MemoryStore {
    async fn get(&self, id: CoverId) -> Result<Option<Cover>, PortError> {
        Ok(self.covers.read().await.get(&id).copied())
    }

    async fn add(&self, cover: &Cover) -> Result<(), PortError> {
        self.covers.write().await.insert(cover.id, *cover);
        Ok(())
    }

    async fn delete(&self, id: CoverId) -> Result<(), PortError> {
        self.covers.write().await.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Cover>, PortError> {
        Ok(self.covers.read().await.values().copied().collect())
    }
}

#[async_trait]
impl CoverLookup for MemoryStore {
    async fn cover(&self, id: CoverId) -> Result<Option<Cover>, PortError> {
        CoverStore::get(self, id).await
    }
}

#[async_trait]
impl ClaimStore for MemoryStore {
    async fn get(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.claims.read().await.get(&id).copied())
    }

    async fn add(&self, claim: &Claim) -> Result<(), PortError> {
        self.claims.write().await.insert(claim.id, *claim);
        Ok(())
    }

    async fn delete(&self, id: ClaimId) -> Result<(), PortError> {
        self.claims.write().await.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        Ok(self.claims.read().await.values().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CoverPeriod, Money};
    use domain_cover::{compute_premium, CoverType};
    use rust_decimal_macros::dec;

    fn sample_cover() -> Cover {
        let period = CoverPeriod::new(
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        );
        Cover {
            id: CoverId::new(),
            cover_type: CoverType::Yacht,
            period,
            premium: compute_premium(period, CoverType::Yacht),
        }
    }

    #[tokio::test]
    async fn test_cover_round_trip() {
        let store = MemoryStore::new();
        let cover = sample_cover();

        CoverStore::add(&store, &cover).await.unwrap();
        assert_eq!(CoverStore::get(&store, cover.id).await.unwrap(), Some(cover));

        CoverStore::delete(&store, cover.id).await.unwrap();
        assert_eq!(CoverStore::get(&store, cover.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_unknown_cover_is_a_noop() {
        let store = MemoryStore::new();
        assert!(CoverStore::delete(&store, CoverId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_lookup_sees_added_covers() {
        let store = MemoryStore::new();
        let cover = sample_cover();
        CoverStore::add(&store, &cover).await.unwrap();

        let found = CoverLookup::cover(&store, cover.id).await.unwrap();
        assert_eq!(found.map(|c| c.premium), Some(Money::new(dec!(41250))));
    }
}
