//! # notekeep-api — Axum API Service
//!
//! HTTP surface for the notes backend, built on Axum/Tower/Tokio.
//!
//! ## Routes
//!
//! - `POST /api/login` — exchange credentials for a bearer token
//! - `GET|POST /api/items` — list and create notes (bearer token required)
//! - `PUT|DELETE /api/items/{id}` — update and delete notes (bearer token required)
//! - `GET /api/health` — liveness probe
//! - `GET /api/openapi.json` — generated OpenAPI document
//! - `GET /metrics` — Prometheus exposition, when metrics are enabled
//!
//! Everything else answers 404 `{"error":"Route not found"}`.
//!
//! ## Middleware Stack (Tower)
//!
//! CorsLayer → TraceLayer → CatchPanicLayer → metrics → AuthLayer (notes only)
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers. Validation, storage, and tokens
//!   live in `notekeep-core`.
//! - All errors map to `{"error": "..."}` responses via [`AppError`].

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::any::Any;

use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let notes = routes::notes::router().route_layer(from_fn_with_state(
        state.clone(),
        auth::auth_middleware,
    ));

    let api = Router::new()
        .merge(routes::login::router())
        .merge(routes::health::router())
        .merge(openapi::router())
        .merge(notes);

    let mut router = Router::new().nest("/api", api);

    if state.config.metrics_enabled {
        router = router
            .route(
                "/metrics",
                get(middleware::metrics::render).fallback(routes::route_not_found),
            )
            .route_layer(from_fn(middleware::metrics::track_metrics));
    }

    router
        .fallback(routes::route_not_found)
        .layer(DefaultBodyLimit::max(extractors::MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Turn a handler panic into the generic 500 body.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}
