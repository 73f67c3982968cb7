//! Search service — multi-field substring query construction.
//!
//! DESIGN
//! ======
//! A free-text term matches when ANY of the named text fields contains it
//! case-insensitively (`ILIKE`, OR-combined). Categorical filters AND exact
//! equality constraints on top. With no term and no filters the search
//! short-circuits to an empty result set without touching the database.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::services::profile::{PROFILE_COLUMNS, Profile};

/// Text fields covered by the free-text term, OR-combined.
pub const SEARCH_FIELDS: [&str; 18] = [
    "name",
    "current_location",
    "current_occupation",
    "language_spoken",
    "mode_of_entry",
    "entry_point",
    "assisting_network",
    "last_known_address",
    "migration_pattern",
    "associated_locations",
    "cover_identity",
    "support_network",
    "criminal_background",
    "case_registered",
    "detained_by",
    "court_proceedings_status",
    "seized_ids",
    "intelligence_dossier",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
}

impl SearchParams {
    fn term(&self) -> Option<&str> {
        self.term.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    fn gender(&self) -> Option<&str> {
        self.gender.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }

    fn occupation(&self) -> Option<&str> {
        self.occupation
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
    }

    /// True when neither a term nor any filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term().is_none() && self.gender().is_none() && self.location().is_none() && self.occupation().is_none()
    }
}

/// Wrap a term in `%` wildcards, escaping LIKE metacharacters so the term
/// matches literally.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Build the search query, or `None` when the parameters short-circuit.
fn build_search_query(params: &SearchParams) -> Option<QueryBuilder<'static, Postgres>> {
    if params.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new(format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE TRUE"));

    if let Some(term) = params.term() {
        let pattern = like_pattern(term);
        builder.push(" AND (");
        let mut separated = builder.separated(" OR ");
        for field in SEARCH_FIELDS {
            separated.push(field);
            separated.push_unseparated(" ILIKE ");
            separated.push_bind_unseparated(pattern.clone());
        }
        builder.push(")");
    }

    if let Some(gender) = params.gender() {
        builder.push(" AND gender = ");
        builder.push_bind(gender.to_owned());
    }
    if let Some(location) = params.location() {
        builder.push(" AND current_location = ");
        builder.push_bind(location.to_owned());
    }
    if let Some(occupation) = params.occupation() {
        builder.push(" AND current_occupation = ");
        builder.push_bind(occupation.to_owned());
    }

    builder.push(" ORDER BY created_at DESC");
    Some(builder)
}

/// Run a search. Newest-created records first; no pagination.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn search_profiles(pool: &PgPool, params: &SearchParams) -> Result<Vec<Profile>, sqlx::Error> {
    let Some(mut builder) = build_search_query(params) else {
        return Ok(Vec::new());
    };
    builder.build_query_as::<Profile>().fetch_all(pool).await
}

/// Distinct categorical values for the search filter dropdowns.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub occupations: Vec<String>,
}

/// Fetch distinct non-null locations and occupations, sorted.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn filter_options(pool: &PgPool) -> Result<FilterOptions, sqlx::Error> {
    let locations = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT current_location FROM profiles \
         WHERE current_location IS NOT NULL ORDER BY current_location ASC",
    )
    .fetch_all(pool)
    .await?;

    let occupations = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT current_occupation FROM profiles \
         WHERE current_occupation IS NOT NULL ORDER BY current_occupation ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(FilterOptions { locations, occupations })
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
