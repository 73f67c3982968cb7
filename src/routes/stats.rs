//! Dashboard stats route.

use axum::extract::State;
use axum::response::Json;

use crate::routes::{ApiError, db_error};
use crate::services::stats::{self, DashboardStats};
use crate::state::AppState;

/// `GET /api/stats` — counts and group-by-mode aggregates over the full
/// record set, computed fresh per request.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    let computed = stats::dashboard_stats(&state.pool)
        .await
        .map_err(|e| db_error("load dashboard stats", &e))?;
    Ok(Json(computed))
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
