//! # Request Metrics
//!
//! HTTP request counters and latency histograms recorded through the
//! `metrics` facade and rendered by the Prometheus exporter at `/metrics`.
//!
//! The path label is the matched route template (`/api/items/{id}`), not
//! the raw URI, so label cardinality stays bounded.

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::error::AppError;
use crate::state::AppState;

pub const HTTP_REQUESTS_TOTAL: &str = "notekeep_http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "notekeep_http_request_duration_seconds";

/// Label used when a request reached no route.
const UNMATCHED_PATH: &str = "unmatched";

/// Install the process-wide Prometheus recorder.
///
/// Call once from the binary. Tests that want a handle without touching the
/// global recorder should use [`detached_handle`].
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// A handle backed by a recorder that is not installed globally. Renders
/// valid (empty) exposition text.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Record method, route template, status, and latency for each request.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    metrics::counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "method" => method,
        "path" => path
    )
    .record(elapsed);

    response
}

/// GET /metrics — Prometheus text exposition.
pub async fn render(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => AppError::route_not_found().into_response(),
    }
}
