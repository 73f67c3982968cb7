//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the HTTP API under `/api` and serves the photo directory statically
//! at `/photos`. Every route is a passive view over the profiles table; no
//! route keeps state across requests.

pub mod photos;
pub mod profiles;
pub mod search;
pub mod stats;

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::photos::MAX_PHOTO_BYTES;
use crate::services::profile::ProfileError;
use crate::state::AppState;

pub fn app(state: AppState, photo_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/profiles",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route("/api/profiles/export.csv", get(profiles::export_profiles))
        .route(
            "/api/profiles/{id}",
            get(profiles::get_profile)
                .patch(profiles::update_profile)
                .delete(profiles::delete_profile),
        )
        .route("/api/profiles/{id}/export.csv", get(profiles::export_profile))
        .route("/api/search", get(search::search))
        .route("/api/search/options", get(search::search_options))
        .route("/api/search/export.csv", get(search::export_search))
        .route("/api/stats", get(stats::dashboard))
        .route(
            "/api/photos",
            post(photos::upload_photo).layer(DefaultBodyLimit::max(MAX_PHOTO_BYTES)),
        )
        .nest_service("/photos", ServeDir::new(photo_dir))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

/// JSON error response: status plus a generic user-facing body. Validation
/// failures carry per-field messages; nothing else is classified further.
pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

/// Generic transient failure body: "failed to X, please try again".
pub(crate) fn db_error(action: &str, err: &sqlx::Error) -> ApiError {
    tracing::error!(error = %err, action, "database call failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": format!("failed to {action}, please try again") })),
    )
}

pub(crate) fn profile_error_response(action: &str, err: ProfileError) -> ApiError {
    match err {
        ProfileError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "profile not found" })),
        ),
        ProfileError::Validation(fields) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": "validation failed", "fields": fields })),
        ),
        ProfileError::Database(e) => db_error(action, &e),
    }
}
