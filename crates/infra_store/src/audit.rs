//! Audit sink implementation
//!
//! Mirrors the audit tables of the upstream system: one row per mutation,
//! keyed by a fresh event id, recording the entity id, the HTTP verb, and
//! when the event was written.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{AuditEventId, AuditVerb, Auditer, ClaimId, CoverId, PortError};

use crate::error::into_port_error;

#[derive(Debug, Clone)]
pub struct PgAuditer {
    pool: PgPool,
}

impl PgAuditer {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn record(
        &self,
        table: &str,
        column: &str,
        entity_id: Uuid,
        verb: AuditVerb,
    ) -> Result<(), PortError> {
        sqlx::query(&format!(
            "INSERT INTO {table} (audit_id, {column}, http_request_type, created) \
             VALUES ($1, $2, $3, $4)"
        ))
        .bind(Uuid::from(AuditEventId::new()))
        .bind(entity_id)
        .bind(verb.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| into_port_error("audit", e))?;

        Ok(())
    }
}

#[async_trait]
impl Auditer for PgAuditer {
    async fn audit_cover(&self, id: CoverId, verb: AuditVerb) -> Result<(), PortError> {
        self.record("cover_audits", "cover_id", Uuid::from(id), verb).await
    }

    async fn audit_claim(&self, id: ClaimId, verb: AuditVerb) -> Result<(), PortError> {
        self.record("claim_audits", "claim_id", Uuid::from(id), verb).await
    }
}
