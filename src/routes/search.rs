//! Search routes — multi-field search, filter options, and result export.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Json, Response};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::routes::profiles::csv_response;
use crate::routes::{ApiError, db_error};
use crate::services::export;
use crate::services::profile::Profile;
use crate::services::search::{self, FilterOptions, SearchParams};
use crate::state::AppState;

/// Resolve the rate-limit key from the `x-client-id` header. Clients that
/// don't identify themselves share the nil bucket.
pub(crate) fn client_id(headers: &HeaderMap) -> Uuid {
    headers
        .get("x-client-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or(Uuid::nil())
}

/// `GET /api/search` — free-text term plus categorical filters. Empty input
/// short-circuits to an empty result set without a database call.
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    if let Err(e) = state.search_limiter.check_and_record(client_id(&headers)) {
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "error": e.to_string() })),
        ));
    }

    let results = search::search_profiles(&state.pool, &params)
        .await
        .map_err(|e| db_error("search profiles", &e))?;
    Ok(Json(results))
}

/// `GET /api/search/options` — distinct locations and occupations for the
/// filter dropdowns.
pub async fn search_options(State(state): State<AppState>) -> Result<Json<FilterOptions>, ApiError> {
    let options = search::filter_options(&state.pool)
        .await
        .map_err(|e| db_error("load filter options", &e))?;
    Ok(Json(options))
}

/// `GET /api/search/export.csv` — download the matching set as CSV. Not rate
/// limited: exporting is an explicit action, not keystroke traffic.
pub async fn export_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let results = search::search_profiles(&state.pool, &params)
        .await
        .map_err(|e| db_error("export search results", &e))?;

    let filename = export::dated_filename("search-results", OffsetDateTime::now_utc().date());
    Ok(csv_response(&filename, export::csv_lines(&export::EXPORT_COLUMNS, &results)))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
