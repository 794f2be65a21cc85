//! Cover service tests
//!
//! Runs the service against small in-memory doubles so the orchestration
//! (id assignment, premium overwrite, audit calls) can be observed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use core_kernel::{AuditVerb, Auditer, ClaimId, CoverId, CoverPeriod, PortError};
use domain_cover::{compute_premium, Cover, CoverDraft, CoverError, CoverService, CoverStore, CoverType};

#[derive(Default)]
struct FakeCoverStore {
    covers: Mutex<HashMap<CoverId, Cover>>,
}

#[async_trait]
impl CoverStore for FakeCoverStore {
    async fn get(&self, id: CoverId) -> Result<Option<Cover>, PortError> {
        Ok(self.covers.lock().unwrap().get(&id).copied())
    }

    async fn add(&self, cover: &Cover) -> Result<(), PortError> {
        self.covers.lock().unwrap().insert(cover.id, *cover);
        Ok(())
    }

    async fn delete(&self, id: CoverId) -> Result<(), PortError> {
        self.covers.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Cover>, PortError> {
        Ok(self.covers.lock().unwrap().values().copied().collect())
    }
}

#[derive(Default)]
struct FakeAuditer {
    events: Mutex<Vec<(String, AuditVerb)>>,
}

impl FakeAuditer {
    fn events(&self) -> Vec<(String, AuditVerb)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Auditer for FakeAuditer {
    async fn audit_cover(&self, id: CoverId, verb: AuditVerb) -> Result<(), PortError> {
        self.events.lock().unwrap().push((id.to_string(), verb));
        Ok(())
    }

    async fn audit_claim(&self, id: ClaimId, verb: AuditVerb) -> Result<(), PortError> {
        self.events.lock().unwrap().push((id.to_string(), verb));
        Ok(())
    }
}

fn upcoming_draft(cover_type: CoverType, days: i64) -> CoverDraft {
    let start = Utc::now().date_naive() + Duration::days(7);
    CoverDraft {
        cover_type,
        period: CoverPeriod::new(start, start + Duration::days(days)),
    }
}

fn service() -> (CoverService, Arc<FakeCoverStore>, Arc<FakeAuditer>) {
    let store = Arc::new(FakeCoverStore::default());
    let auditer = Arc::new(FakeAuditer::default());
    let service = CoverService::new(store.clone(), auditer.clone());
    (service, store, auditer)
}

#[tokio::test]
async fn test_create_assigns_id_and_computed_premium() {
    let (service, store, _) = service();
    let draft = upcoming_draft(CoverType::Tanker, 90);

    let cover = service.create(draft).await.unwrap();

    assert_eq!(cover.premium, compute_premium(draft.period, CoverType::Tanker));
    let stored = store.get(cover.id).await.unwrap().unwrap();
    assert_eq!(stored, cover);
}

#[tokio::test]
async fn test_create_assigns_fresh_ids() {
    let (service, _, _) = service();
    let draft = upcoming_draft(CoverType::Yacht, 30);

    let first = service.create(draft).await.unwrap();
    let second = service.create(draft).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_audits_post() {
    let (service, _, auditer) = service();

    let cover = service
        .create(upcoming_draft(CoverType::BulkCarrier, 60))
        .await
        .unwrap();

    assert_eq!(auditer.events(), vec![(cover.id.to_string(), AuditVerb::Post)]);
}

#[tokio::test]
async fn test_create_rejects_past_start_without_side_effects() {
    let (service, store, auditer) = service();
    let start = Utc::now().date_naive() - Duration::days(1);
    let draft = CoverDraft {
        cover_type: CoverType::Yacht,
        period: CoverPeriod::new(start, start + Duration::days(30)),
    };

    let err = service.create(draft).await.unwrap_err();

    assert!(matches!(err, CoverError::StartDateInPast));
    assert!(store.list().await.unwrap().is_empty());
    assert!(auditer.events().is_empty());
}

#[tokio::test]
async fn test_get_missing_cover_is_none() {
    let (service, _, _) = service();
    assert!(service.get(CoverId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_audits_even_for_unknown_id() {
    // Deletion does not pre-check existence
    let (service, _, auditer) = service();
    let id = CoverId::new();

    service.delete(id).await.unwrap();

    assert_eq!(auditer.events(), vec![(id.to_string(), AuditVerb::Delete)]);
}

#[tokio::test]
async fn test_delete_removes_stored_cover() {
    let (service, store, _) = service();
    let cover = service
        .create(upcoming_draft(CoverType::ContainerShip, 45))
        .await
        .unwrap();

    service.delete(cover.id).await.unwrap();

    assert!(store.get(cover.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_returns_created_covers() {
    let (service, _, _) = service();
    service.create(upcoming_draft(CoverType::Yacht, 10)).await.unwrap();
    service.create(upcoming_draft(CoverType::Tanker, 20)).await.unwrap();

    assert_eq!(service.list().await.unwrap().len(), 2);
}
