//! # Request Body Extraction
//!
//! Handlers accept `Result<Json<T>, JsonRejection>` and pass it through
//! [`json_or_default`]. A body that is missing, not JSON, or has the wrong
//! shape is read as `T::default()`, so the handler's own field validation
//! produces the client-facing message instead of a framework rejection.
//! A body over the size limit is the one rejection surfaced as its own
//! error (413).

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;

/// Upper bound on request bodies, applied with `DefaultBodyLimit` in
/// [`crate::app`].
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Unwrap a JSON body, falling back to `T::default()` on any rejection
/// except an oversized body.
pub fn json_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::debug!(error = %rejection.body_text(), "request body over limit");
            Err(AppError::PayloadTooLarge)
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "unreadable JSON body, treating as empty");
            Ok(T::default())
        }
    }
}
