//! # notekeep-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Settings come from the environment and may
//! be overridden on the command line.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notekeep_api::auth::SecretString;
use notekeep_api::state::{AppConfig, AppState, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "notekeep-api", version, about = "Notes backend with bearer-token login")]
struct Cli {
    /// Port to listen on. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Token signing secret. Overrides JWT_SECRET.
    #[arg(long)]
    jwt_secret: Option<String>,

    /// Start with an empty note store.
    #[arg(long)]
    no_seed: bool,

    /// Disable request metrics and the /metrics endpoint.
    #[arg(long)]
    no_metrics: bool,

    /// Log output format: pretty or json. Overrides NOTEKEEP_LOG_FORMAT.
    #[arg(long)]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(secret) = self.jwt_secret.filter(|s| !s.is_empty()) {
            config.jwt_secret = SecretString::new(secret);
        }
        if self.no_seed {
            config.seed_notes = false;
        }
        if self.no_metrics {
            config.metrics_enabled = false;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().apply(AppConfig::from_env());
    init_tracing(config.log_format);

    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET not set; signing tokens with the built-in default secret");
    }

    let port = config.port;
    let metrics_enabled = config.metrics_enabled;
    let mut state = AppState::with_config(config);

    if metrics_enabled {
        let handle = notekeep_api::middleware::metrics::install_recorder()
            .context("installing Prometheus recorder")?;
        state = state.with_metrics(handle);
    }

    tracing::info!(notes = state.notes.len(), "note store ready");
    let app = notekeep_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("notekeep API listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
