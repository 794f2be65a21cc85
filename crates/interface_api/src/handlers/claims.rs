//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::ClaimId;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Lists all claims
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.list().await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by id
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClaimResponse>, ApiError> {
    state
        .claims
        .get(ClaimId::from(id))
        .await?
        .map(|claim| Json(claim.into()))
        .ok_or_else(|| ApiError::NotFound("claim not found".to_string()))
}

/// Creates a claim against an existing cover
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.create(request.into_draft()).await?;
    Ok(Json(claim.into()))
}

/// Deletes a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.claims.delete(ClaimId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
