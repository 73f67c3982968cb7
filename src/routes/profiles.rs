//! Profile CRUD, listing, and CSV export routes.

use axum::body::{Body, Bytes};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::routes::{ApiError, profile_error_response};
use crate::services::export;
use crate::services::profile::{
    self, ListParams, NewProfile, ProfilePage, SortColumn, SortOrder, UpdateProfile,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Resolve query parameters against the sort whitelist; unknown values fall
/// back to the defaults rather than erroring.
pub(crate) fn list_params(query: &ListQuery) -> ListParams {
    let defaults = ListParams::default();
    ListParams {
        sort_by: query
            .sort_by
            .as_deref()
            .and_then(SortColumn::from_param)
            .unwrap_or(defaults.sort_by),
        order: query
            .order
            .as_deref()
            .and_then(SortOrder::from_param)
            .unwrap_or(defaults.order),
        name: query.name.clone(),
        limit: query.limit.unwrap_or(defaults.limit),
        offset: query.offset.unwrap_or(0),
    }
}

/// `GET /api/profiles` — sorted, filtered, paginated listing.
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProfilePage>, ApiError> {
    let params = list_params(&query);
    let page = profile::list_profiles(&state.pool, &params)
        .await
        .map_err(|e| profile_error_response("load profiles", e))?;
    Ok(Json(page))
}

/// `POST /api/profiles` — validate and insert one record.
pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<NewProfile>,
) -> Result<(StatusCode, Json<profile::Profile>), ApiError> {
    let created = profile::create_profile(&state.pool, body)
        .await
        .map_err(|e| profile_error_response("create profile", e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/profiles/:id` — fetch one record.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<profile::Profile>, ApiError> {
    let found = profile::get_profile(&state.pool, id)
        .await
        .map_err(|e| profile_error_response("load profile", e))?;
    Ok(Json(found))
}

/// `PATCH /api/profiles/:id` — partial update. Age is never recomputed.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProfile>,
) -> Result<Json<profile::Profile>, ApiError> {
    let updated = profile::update_profile(&state.pool, id, body)
        .await
        .map_err(|e| profile_error_response("update profile", e))?;
    Ok(Json(updated))
}

/// `DELETE /api/profiles/:id` — hard delete. Returns OK only after the
/// database confirms the row was removed; callers keep the row on failure.
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    profile::delete_profile(&state.pool, id)
        .await
        .map_err(|e| profile_error_response("delete profile", e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// =============================================================================
// CSV EXPORT
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    /// Comma-separated subset of the export columns; defaults to all.
    pub columns: Option<String>,
    /// Same substring filter the table view applies to the name column.
    pub name: Option<String>,
}

/// Validate a comma-separated column list against the export column set.
pub(crate) fn parse_columns(raw: &str) -> Result<Vec<&'static str>, String> {
    let mut columns = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match export::EXPORT_COLUMNS.iter().find(|c| **c == part) {
            Some(column) => columns.push(*column),
            None => return Err(format!("unknown export column: {part}")),
        }
    }
    if columns.is_empty() {
        return Err("no export columns selected".to_owned());
    }
    Ok(columns)
}

/// Build a `text/csv` attachment response from pre-serialized lines.
pub(crate) fn csv_response(filename: &str, lines: Vec<String>) -> Response {
    let stream = futures::stream::iter(
        lines
            .into_iter()
            .map(|line| Ok::<Bytes, std::convert::Infallible>(Bytes::from(format!("{line}\n")))),
    );
    let body = Body::from_stream(stream);

    (
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response()
}

/// `GET /api/profiles/export.csv` — download the table as CSV.
pub async fn export_profiles(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let columns = match query.columns.as_deref() {
        Some(raw) => parse_columns(raw).map_err(|message| {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
        })?,
        None => export::EXPORT_COLUMNS.to_vec(),
    };

    let profiles = profile::list_all(&state.pool, query.name.as_deref())
        .await
        .map_err(|e| profile_error_response("export profiles", e))?;

    let filename = export::dated_filename("profiles-export", OffsetDateTime::now_utc().date());
    Ok(csv_response(&filename, export::csv_lines(&columns, &profiles)))
}

/// `GET /api/profiles/:id/export.csv` — download one record as `key,value`
/// lines.
pub async fn export_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let found = profile::get_profile(&state.pool, id)
        .await
        .map_err(|e| profile_error_response("export profile", e))?;

    let filename = export::profile_filename(&found.name);
    Ok(csv_response(&filename, export::profile_key_values(&found)))
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
