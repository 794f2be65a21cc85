//! Capturing audit sink

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use core_kernel::{AuditVerb, Auditer, ClaimId, CoverId, PortError};

/// Which entity an audit event was recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditedEntity {
    Cover,
    Claim,
}

/// One captured audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAudit {
    pub entity: AuditedEntity,
    pub id: Uuid,
    pub verb: AuditVerb,
}

/// An `Auditer` that records every event for later assertions
#[derive(Debug, Default)]
pub struct RecordingAuditer {
    events: Mutex<Vec<RecordedAudit>>,
}

impl RecordingAuditer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in order
    pub fn events(&self) -> Vec<RecordedAudit> {
        self.events.lock().unwrap().clone()
    }

    /// Events recorded for covers only
    pub fn cover_events(&self) -> Vec<RecordedAudit> {
        self.events()
            .into_iter()
            .filter(|e| e.entity == AuditedEntity::Cover)
            .collect()
    }

    /// Events recorded for claims only
    pub fn claim_events(&self) -> Vec<RecordedAudit> {
        self.events()
            .into_iter()
            .filter(|e| e.entity == AuditedEntity::Claim)
            .collect()
    }
}

#[async_trait]
impl Auditer for RecordingAuditer {
    async fn audit_cover(&self, id: CoverId, verb: AuditVerb) -> Result<(), PortError> {
        self.events.lock().unwrap().push(RecordedAudit {
            entity: AuditedEntity::Cover,
            id: Uuid::from(id),
            verb,
        });
        Ok(())
    }

    async fn audit_claim(&self, id: ClaimId, verb: AuditVerb) -> Result<(), PortError> {
        self.events.lock().unwrap().push(RecordedAudit {
            entity: AuditedEntity::Claim,
            id: Uuid::from(id),
            verb,
        });
        Ok(())
    }
}
