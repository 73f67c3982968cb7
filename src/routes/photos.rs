//! Photo upload route.
//!
//! Upload and record insert are separate requests, as in the entry form's
//! flow: the form uploads first, then references the returned URL on insert.
//! A failed insert therefore leaves the upload orphaned; `PhotoStore::remove`
//! is the compensation hook for an operator-driven cleanup.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::routes::ApiError;
use crate::services::photos::{MAX_PHOTO_BYTES, PhotoError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub ext: String,
}

/// `POST /api/photos?ext=jpg` — store the raw request body and return the
/// public URL to reference from a profile.
pub async fn upload_photo(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if body.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "photo body is empty" })),
        ));
    }
    if body.len() > MAX_PHOTO_BYTES {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(serde_json::json!({ "error": "photo exceeds the 5MB limit" })),
        ));
    }

    let photo_url = state.photos.store(&query.ext, &body).await.map_err(|e| match e {
        PhotoError::UnsupportedExtension(_) | PhotoError::ForeignUrl(_) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
        PhotoError::Io(io) => {
            tracing::error!(error = %io, "photo write failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to upload photo, please try again" })),
            )
        }
    })?;

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "photo_url": photo_url }))))
}

#[cfg(test)]
#[path = "photos_test.rs"]
mod tests;
