//! # Application State
//!
//! Configuration and shared services handed to every route handler.
//! Stores are constructed once at startup and shared through `Arc`; nothing
//! here is a process global.

use std::str::FromStr;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use notekeep_core::{NoteStore, Timestamp, TokenKey, UserDirectory};

use crate::auth::SecretString;

/// Secret used when `JWT_SECRET` is not set. Fine for a demo, never for a
/// shared deployment; `main` warns when it is in effect.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format {other:?} (expected pretty or json)")),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// HMAC secret for signing bearer tokens.
    pub jwt_secret: SecretString,
    /// Start with the two welcome notes.
    pub seed_notes: bool,
    /// Record request metrics and serve `/metrics`.
    pub metrics_enabled: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: SecretString::new(DEFAULT_JWT_SECRET),
            seed_notes: true,
            metrics_enabled: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// - `PORT` — listen port (default 5000)
    /// - `JWT_SECRET` — token signing secret
    /// - `NOTEKEEP_SEED_NOTES` — `false` to start with an empty store
    /// - `NOTEKEEP_METRICS_ENABLED` — `false` to disable metrics
    /// - `NOTEKEEP_LOG_FORMAT` — `pretty` or `json`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unparseable values
    /// fall back to the default for that setting.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret: lookup("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .map(SecretString::new)
                .unwrap_or(defaults.jwt_secret),
            seed_notes: lookup("NOTEKEEP_SEED_NOTES")
                .map(|v| !is_false(&v))
                .unwrap_or(defaults.seed_notes),
            metrics_enabled: lookup("NOTEKEEP_METRICS_ENABLED")
                .map(|v| !is_false(&v))
                .unwrap_or(defaults.metrics_enabled),
            log_format: lookup("NOTEKEEP_LOG_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret.expose() == DEFAULT_JWT_SECRET
    }
}

fn is_false(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserDirectory>,
    pub notes: Arc<NoteStore>,
    pub token_key: Arc<TokenKey>,
    /// Present when the binary installed a Prometheus recorder.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("users", &self.users.len())
            .field("notes", &self.notes)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let notes = if config.seed_notes {
            NoteStore::with_welcome_notes(Timestamp::now())
        } else {
            NoteStore::new()
        };
        let token_key = TokenKey::from_secret(config.jwt_secret.expose().as_bytes());
        Self {
            config: Arc::new(config),
            users: Arc::new(UserDirectory::with_default_users()),
            notes: Arc::new(notes),
            token_key: Arc::new(token_key),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle so `/metrics` can render it.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
