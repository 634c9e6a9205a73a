//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented handlers into one OpenAPI 3.1 document,
//! served at `/api/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/login, valid for 24 hours."))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notekeep API",
        description = "Small notes backend. Log in with a username and password to get a bearer token, then list, create, update, and delete notes under `/api/items`."
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    paths(
        crate::routes::login::login,
        crate::routes::notes::list_notes,
        crate::routes::notes::create_note,
        crate::routes::notes::update_note,
        crate::routes::notes::delete_note,
        crate::routes::health::health,
    ),
    components(
        schemas(
            notekeep_core::Note,
            notekeep_core::Identity,
            crate::error::ErrorBody,
            crate::routes::login::LoginRequest,
            crate::routes::login::LoginResponse,
            crate::routes::notes::NoteContentRequest,
            crate::routes::health::HealthResponse,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Username/password login and token issuance"),
        (name = "notes", description = "Note CRUD, bearer token required"),
        (name = "health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/openapi.json",
        get(openapi_json).fallback(crate::routes::route_not_found),
    )
}

/// GET /api/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
