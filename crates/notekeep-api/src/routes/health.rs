//! # Health Check
//!
//! Route:
//! - GET /api/health — liveness probe, unauthenticated

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use notekeep_core::Timestamp;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"OK"`.
    pub status: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: Timestamp,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health).fallback(super::route_not_found))
}

/// GET /api/health — Report that the process is up.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    security(()),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Timestamp::now(),
    })
}
