//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are assembled under `/api` in [`crate::app`].

pub mod health;
pub mod login;
pub mod notes;

use crate::error::AppError;

/// Fallback for unmatched paths and unsupported methods.
pub async fn route_not_found() -> AppError {
    AppError::route_not_found()
}
