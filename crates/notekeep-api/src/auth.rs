//! # Authentication Middleware
//!
//! JWT bearer-token guard for the notes routes. Login, health, and the
//! OpenAPI document are mounted outside it.
//!
//! The guard only checks the token: signature under the server secret and
//! expiry against the current time. No user lookup happens per request.
//! On success the decoded identity is stored in request extensions and
//! handlers read it back through the [`CallerIdentity`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use notekeep_core::{token, Identity};

use crate::error::AppError;
use crate::state::AppState;

/// Scheme prefix expected in the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// A string whose `Debug` output never reveals its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

/// Identity of the authenticated caller, placed in request extensions by
/// [`auth_middleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub Identity);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .ok_or(AppError::MissingToken)
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The token is the text between the single space after `Bearer` and the
/// next space. Returns `None` when the header is absent, not valid UTF-8,
/// uses another scheme, or that segment is empty (`Bearer  abc` included).
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.split(' ').next()?;
    (!token.is_empty()).then_some(token)
}

/// Reject requests without a valid bearer token.
///
/// - no token → 401 `Access token required`
/// - bad signature, malformed, or expired → 403 `Invalid token`
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::MissingToken)?;
    let identity = token::verify(token, &state.token_key, Utc::now())?;

    request.extensions_mut().insert(CallerIdentity(identity));
    Ok(next.run(request).await)
}
