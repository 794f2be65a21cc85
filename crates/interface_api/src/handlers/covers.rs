//! Cover handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::{CoverId, CoverPeriod};

use crate::dto::covers::*;
use crate::{error::ApiError, AppState};

/// Lists all covers
pub async fn list_covers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CoverResponse>>, ApiError> {
    let covers = state.covers.list().await?;
    Ok(Json(covers.into_iter().map(CoverResponse::from).collect()))
}

/// Gets a cover by id
pub async fn get_cover(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverResponse>, ApiError> {
    state
        .covers
        .get(CoverId::from(id))
        .await?
        .map(|cover| Json(cover.into()))
        .ok_or_else(|| ApiError::NotFound("cover not found".to_string()))
}

/// Creates a cover; the response carries the assigned id and computed premium
pub async fn create_cover(
    State(state): State<AppState>,
    Json(request): Json<CreateCoverRequest>,
) -> Result<Json<CoverResponse>, ApiError> {
    let cover = state.covers.create(request.into_draft()).await?;
    Ok(Json(cover.into()))
}

/// Deletes a cover
pub async fn delete_cover(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.covers.delete(CoverId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Prices a period without creating a cover
///
/// Quotes are unvalidated by design; out-of-order dates simply price at zero.
pub async fn compute_premium(
    State(state): State<AppState>,
    Query(params): Query<ComputePremiumParams>,
) -> Result<Json<PremiumQuoteResponse>, ApiError> {
    let premium = state.covers.compute_premium(
        CoverPeriod::new(params.start_date, params.end_date),
        params.cover_type,
    );
    Ok(Json(PremiumQuoteResponse { premium }))
}
