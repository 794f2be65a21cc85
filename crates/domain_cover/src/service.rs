//! Cover service
//!
//! Orchestration around the pure rating and validation functions: id
//! assignment, persistence, and audit calls. Collaborators arrive by
//! constructor injection; the service holds no other state and is cheap to
//! clone into request handlers.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use core_kernel::{AuditVerb, Auditer, CoverId, CoverPeriod, Money};

use crate::cover::{Cover, CoverDraft, CoverType};
use crate::error::CoverError;
use crate::ports::CoverStore;
use crate::premium::compute_premium;
use crate::validate::validate_cover;

#[derive(Clone)]
pub struct CoverService {
    store: Arc<dyn CoverStore>,
    auditer: Arc<dyn Auditer>,
}

impl CoverService {
    pub fn new(store: Arc<dyn CoverStore>, auditer: Arc<dyn Auditer>) -> Self {
        Self { store, auditer }
    }

    /// Creates a cover from client-supplied fields
    ///
    /// Validation runs against the current UTC date before an id is
    /// assigned. The premium is always computed here; drafts carry none and
    /// any value a client sent upstream has already been dropped.
    pub async fn create(&self, draft: CoverDraft) -> Result<Cover, CoverError> {
        validate_cover(draft.period, Utc::now().date_naive())?;

        let cover = Cover {
            id: CoverId::new(),
            cover_type: draft.cover_type,
            period: draft.period,
            premium: compute_premium(draft.period, draft.cover_type),
        };

        self.store.add(&cover).await?;
        self.auditer.audit_cover(cover.id, AuditVerb::Post).await?;
        info!(cover_id = %cover.id, "cover created");

        Ok(cover)
    }

    /// Fetches one cover; `None` when the id is unknown
    pub async fn get(&self, id: CoverId) -> Result<Option<Cover>, CoverError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Cover>, CoverError> {
        Ok(self.store.list().await?)
    }

    /// Deletes a cover
    ///
    /// The deletion is audited and logged before the store call, and the
    /// store is not consulted for existence first; deleting an unknown id
    /// is a no-op.
    pub async fn delete(&self, id: CoverId) -> Result<(), CoverError> {
        self.auditer.audit_cover(id, AuditVerb::Delete).await?;
        info!(cover_id = %id, "cover deleted");
        Ok(self.store.delete(id).await?)
    }

    /// Prices a period without creating anything
    ///
    /// Quotes are not validated: an inverted range simply prices at zero.
    pub fn compute_premium(&self, period: CoverPeriod, cover_type: CoverType) -> Money {
        compute_premium(period, cover_type)
    }
}
