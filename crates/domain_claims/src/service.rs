//! Claim service

use std::sync::Arc;

use tracing::info;

use core_kernel::{AuditVerb, Auditer, ClaimId};

use crate::claim::{Claim, ClaimDraft};
use crate::error::ClaimError;
use crate::ports::{ClaimStore, CoverLookup};
use crate::validate::validate_claim;

#[derive(Clone)]
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
    covers: Arc<dyn CoverLookup>,
    auditer: Arc<dyn Auditer>,
}

impl ClaimService {
    pub fn new(
        store: Arc<dyn ClaimStore>,
        covers: Arc<dyn CoverLookup>,
        auditer: Arc<dyn Auditer>,
    ) -> Self {
        Self {
            store,
            covers,
            auditer,
        }
    }

    /// Creates a claim from client-supplied fields
    ///
    /// Validation resolves the referenced cover; only after it passes is an
    /// id assigned and the claim persisted and audited.
    pub async fn create(&self, draft: ClaimDraft) -> Result<Claim, ClaimError> {
        validate_claim(&draft, self.covers.as_ref()).await?;

        let claim = Claim {
            id: ClaimId::new(),
            cover_id: draft.cover_id,
            created: draft.created,
            claim_type: draft.claim_type,
            damage_cost: draft.damage_cost,
        };

        self.store.add(&claim).await?;
        self.auditer.audit_claim(claim.id, AuditVerb::Post).await?;
        info!(claim_id = %claim.id, cover_id = %claim.cover_id, "claim created");

        Ok(claim)
    }

    /// Fetches one claim; `None` when the id is unknown
    pub async fn get(&self, id: ClaimId) -> Result<Option<Claim>, ClaimError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.list().await?)
    }

    /// Deletes a claim
    ///
    /// Audited and logged before the store call; no existence pre-check.
    pub async fn delete(&self, id: ClaimId) -> Result<(), ClaimError> {
        self.auditer.audit_claim(id, AuditVerb::Delete).await?;
        info!(claim_id = %id, "claim deleted");
        Ok(self.store.delete(id).await?)
    }
}
