//! # Bearer Tokens
//!
//! Compact HS256 JWTs carrying `{id, username, iat, exp}`. Tokens live for
//! [`TOKEN_LIFETIME_SECS`] and cannot be revoked; a token is valid exactly when
//! its signature checks out under the server secret and `now < exp`.
//!
//! Both [`issue`] and [`verify`] take the clock as an argument. The expiry
//! check is done here rather than inside `jsonwebtoken` so that it uses that
//! clock, with no leeway.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TokenError;
use crate::identity::UserId;

/// Fixed token lifetime: 24 hours.
pub const TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Who a verified token speaks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
}

/// JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId,
    pub username: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// A freshly signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Symmetric signing key derived from the server secret.
#[derive(Clone)]
pub struct TokenKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for TokenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenKey([REDACTED])")
    }
}

impl TokenKey {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Sign a token for `identity`, valid from `now` for [`TOKEN_LIFETIME_SECS`].
pub fn issue(
    key: &TokenKey,
    identity: &Identity,
    now: DateTime<Utc>,
) -> Result<IssuedToken, TokenError> {
    let iat = now.timestamp();
    let claims = Claims {
        id: identity.id,
        username: identity.username.clone(),
        iat,
        exp: iat + TOKEN_LIFETIME_SECS,
    };
    let token = jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &key.encoding)
        .map_err(TokenError::Encode)?;
    Ok(IssuedToken { token, claims })
}

/// Check `token`'s signature and expiry and return the identity it carries.
pub fn verify(token: &str, key: &TokenKey, now: DateTime<Utc>) -> Result<Identity, TokenError> {
    let claims = decode_claims(token, key)?;
    let now = now.timestamp();
    if now >= claims.exp {
        return Err(TokenError::Expired {
            expired_at: claims.exp,
            now,
        });
    }
    Ok(claims.identity())
}

/// Signature-checked claims, without the expiry check.
pub fn decode_claims(token: &str, key: &TokenKey) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp"]);
    jsonwebtoken::decode::<Claims>(token, &key.decoding, &validation)
        .map(|data| data.claims)
        .map_err(TokenError::Rejected)
}
