//! # Error Types
//!
//! Domain errors for notekeep. Each variant's `Display` text is the exact
//! message a client sees, so the API layer can forward it unchanged.

use thiserror::Error;

/// Failure of a note collection operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// Content was absent or only whitespace.
    #[error("Content is required")]
    EmptyContent,

    /// No note carries the requested id.
    #[error("Note not found")]
    NotFound,
}

/// Failure of a login attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password was absent or empty.
    #[error("Username and password required")]
    MissingCredentials,

    /// No user matches the supplied pair.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Failure to mint or accept a bearer token.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signing the claims failed.
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// Signature, structure, or claims did not check out.
    #[error("token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),

    /// Signature is good but the token is past its expiry.
    #[error("token expired at {expired_at} (now {now})")]
    Expired { expired_at: i64, now: i64 },
}
