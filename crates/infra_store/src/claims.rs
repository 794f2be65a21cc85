//! Claim store implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{ClaimId, CoverId, Money, PortError};
use domain_claims::{Claim, ClaimStore};

use crate::error::into_port_error;

#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClaimRow {
    claim_id: Uuid,
    cover_id: Uuid,
    created: DateTime<Utc>,
    claim_type: String,
    damage_cost: Decimal,
}

fn decode(row: ClaimRow) -> Result<Claim, PortError> {
    let claim_type = row
        .claim_type
        .parse()
        .map_err(|e: domain_claims::ParseClaimTypeError| PortError::decode(e.to_string()))?;

    Ok(Claim {
        id: ClaimId::from(row.claim_id),
        cover_id: CoverId::from(row.cover_id),
        created: row.created,
        claim_type,
        damage_cost: Money::new(row.damage_cost),
    })
}

const SELECT_CLAIM: &str =
    "SELECT claim_id, cover_id, created, claim_type, damage_cost FROM claims";

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn get(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!("{SELECT_CLAIM} WHERE claim_id = $1"))
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| into_port_error("get_claim", e))?;

        row.map(decode).transpose()
    }

    async fn add(&self, claim: &Claim) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO claims (claim_id, cover_id, created, claim_type, damage_cost) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::from(claim.id))
        .bind(Uuid::from(claim.cover_id))
        .bind(claim.created)
        .bind(claim.claim_type.as_str())
        .bind(claim.damage_cost.amount())
        .execute(&self.pool)
        .await
        .map_err(|e| into_port_error("add_claim", e))?;

        Ok(())
    }

    async fn delete(&self, id: ClaimId) -> Result<(), PortError> {
        sqlx::query("DELETE FROM claims WHERE claim_id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(|e| into_port_error("delete_claim", e))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        let rows = sqlx::query_as::<_, ClaimRow>(&format!("{SELECT_CLAIM} ORDER BY created"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| into_port_error("list_claims", e))?;

        rows.into_iter().map(decode).collect()
    }
}
