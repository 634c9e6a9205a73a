//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failure leaves the service as `{"error": "<message>"}` with the
//! status code as the only machine-readable signal. Internal details are
//! logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use notekeep_core::{AuthError, NoteError, TokenError};

/// Client-facing text for any 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";
/// Client-facing text for unmatched routes.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";
/// Client-facing text for bodies over the size limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing input (400).
    #[error("validation error: {0}")]
    Validation(String),

    /// Credentials did not match any user (401).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// No bearer token on a guarded route (401).
    #[error("missing bearer token")]
    MissingToken,

    /// Bearer token present but bad signature, malformed, or expired (403).
    #[error("invalid bearer token: {0}")]
    InvalidToken(String),

    /// Request body exceeded the configured limit (413).
    #[error("request body too large")]
    PayloadTooLarge,

    /// Resource or route not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Anything unexpected (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) | Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken(_) => StatusCode::FORBIDDEN,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text placed in the response body's `error` field.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Authentication(msg) | Self::NotFound(msg) => msg.clone(),
            Self::MissingToken => "Access token required".to_string(),
            Self::InvalidToken(_) => "Invalid token".to_string(),
            Self::PayloadTooLarge => PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn route_not_found() -> Self {
        Self::NotFound(ROUTE_NOT_FOUND_MESSAGE.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::MissingToken | Self::InvalidToken(_) | Self::Authentication(_) => {
                tracing::debug!(error = %self, "request rejected")
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.client_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<NoteError> for AppError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::EmptyContent => Self::Validation(err.to_string()),
            NoteError::NotFound => Self::NotFound(err.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => Self::Validation(err.to_string()),
            AuthError::InvalidCredentials => Self::Authentication(err.to_string()),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encode(_) => Self::Internal(err.to_string()),
            TokenError::Rejected(_) | TokenError::Expired { .. } => {
                Self::InvalidToken(err.to_string())
            }
        }
    }
}
