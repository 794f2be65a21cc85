//! HTTP API Layer
//!
//! This crate provides the REST API for the marine cover system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for covers, claims, and premium quotes
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects (camelCase wire form)
//! - **Error Handling**: Consistent error responses carrying the reason string
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState { covers, claims });
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimService;
use domain_cover::CoverService;

use crate::handlers::{claims, covers, health};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub covers: CoverService,
    pub claims: ClaimService,
}

/// Creates the main API router
///
/// Routes mirror the upstream surface: collection CRUD for covers and
/// claims at the root, plus the premium quote endpoint.
pub fn create_router(state: AppState) -> Router {
    let cover_routes = Router::new()
        .route("/", get(covers::list_covers).post(covers::create_cover))
        .route("/:id", get(covers::get_cover).delete(covers::delete_cover));

    let claim_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:id", get(claims::get_claim).delete(claims::delete_claim));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/compute-premium", post(covers::compute_premium))
        .nest("/covers", cover_routes)
        .nest("/claims", claim_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
