//! # Users
//!
//! The credential list is fixed at startup and never changes. Passwords are
//! compared as plaintext; this is a demo credential set, not an account
//! system.

use subtle::ConstantTimeEq;

use crate::error::AuthError;
use crate::identity::UserId;
use crate::token::Identity;

/// A known user. `password` never leaves this crate in a response.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    password: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// The public part of the user, as embedded in tokens and login responses.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
        }
    }

    fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

/// Immutable set of users that may log in.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_default_users()
    }
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The two demo accounts: `admin`/`password` and `user`/`test123`.
    pub fn with_default_users() -> Self {
        Self::new(vec![
            User::new(UserId(1), "admin", "password"),
            User::new(UserId(2), "user", "test123"),
        ])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Find the user whose username and password both match exactly.
    ///
    /// Both inputs must be non-empty. Matching is case-sensitive.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        self.users
            .iter()
            .find(|u| u.username == username && u.password_matches(password))
            .ok_or(AuthError::InvalidCredentials)
    }
}
