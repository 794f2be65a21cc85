//! Cover store implementation
//!
//! One row per cover document in the `covers` table. The vessel class is
//! stored as its text token and decoded on the way out.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CoverId, CoverPeriod, Money, PortError};
use domain_claims::CoverLookup;
use domain_cover::{Cover, CoverStore};

use crate::error::into_port_error;

#[derive(Debug, Clone)]
pub struct PgCoverStore {
    pool: PgPool,
}

impl PgCoverStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CoverRow {
    cover_id: Uuid,
    cover_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    premium: Decimal,
}

fn decode(row: CoverRow) -> Result<Cover, PortError> {
    let cover_type = row
        .cover_type
        .parse()
        .map_err(|e: domain_cover::ParseCoverTypeError| PortError::decode(e.to_string()))?;

    Ok(Cover {
        id: CoverId::from(row.cover_id),
        cover_type,
        period: CoverPeriod::new(row.start_date, row.end_date),
        premium: Money::new(row.premium),
    })
}

const SELECT_COVER: &str =
    "SELECT cover_id, cover_type, start_date, end_date, premium FROM covers";

#[async_trait]
impl CoverStore for PgCoverStore {
    async fn get(&self, id: CoverId) -> Result<Option<Cover>, PortError> {
        let row = sqlx::query_as::<_, CoverRow>(&format!("{SELECT_COVER} WHERE cover_id = $1"))
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| into_port_error("get_cover", e))?;

        row.map(decode).transpose()
    }

    async fn add(&self, cover: &Cover) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO covers (cover_id, cover_type, start_date, end_date, premium) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::from(cover.id))
        .bind(cover.cover_type.as_str())
        .bind(cover.period.start_date)
        .bind(cover.period.end_date)
        .bind(cover.premium.amount())
        .execute(&self.pool)
        .await
        .map_err(|e| into_port_error("add_cover", e))?;

        Ok(())
    }

    async fn delete(&self, id: CoverId) -> Result<(), PortError> {
        sqlx::query("DELETE FROM covers WHERE cover_id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(|e| into_port_error("delete_cover", e))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Cover>, PortError> {
        let rows = sqlx::query_as::<_, CoverRow>(&format!("{SELECT_COVER} ORDER BY start_date"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| into_port_error("list_covers", e))?;

        rows.into_iter().map(decode).collect()
    }
}

#[async_trait]
impl CoverLookup for PgCoverStore {
    async fn cover(&self, id: CoverId) -> Result<Option<Cover>, PortError> {
        CoverStore::get(self, id).await
    }
}
