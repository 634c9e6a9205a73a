//! # Login
//!
//! Route:
//! - POST /api/login — exchange username/password for a 24-hour bearer token

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use notekeep_core::{token, Identity};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json_or_default;
use crate::state::AppState;

/// Login request. Both fields are required and must be non-empty.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login: the token plus the public part of the user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/login",
        post(login).fallback(super::route_not_found),
    )
}

/// POST /api/login — Authenticate and issue a bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Username or password missing", body = ErrorBody),
        (status = 413, description = "Request body too large", body = ErrorBody),
        (status = 401, description = "Credentials do not match", body = ErrorBody),
    ),
    security(()),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let req = json_or_default(body)?;
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let user = state
        .users
        .authenticate(&username, &password)
        .map_err(|e| {
            tracing::info!(username = %username, reason = %e, "login rejected");
            e
        })?;

    let identity = user.identity();
    let issued = token::issue(&state.token_key, &identity, Utc::now())?;
    tracing::info!(user = %identity.username, expires_at = issued.claims.exp, "token issued");

    Ok(Json(LoginResponse {
        token: issued.token,
        user: identity,
    }))
}
