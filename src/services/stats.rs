//! Dashboard aggregation — counts and group-by-mode over the full record set.
//!
//! DESIGN
//! ======
//! Stats are computed in a single pass over rows fetched fresh per request in
//! insertion (`created_at ASC`) order, so "first encountered" is a stable
//! tie-break for the most-frequent buckets.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use time::{Date, Duration, OffsetDateTime};

/// Trailing window for the recent-entries counter.
const RECENT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_profiles: usize,
    pub male_count: usize,
    pub female_count: usize,
    pub other_count: usize,
    pub top_location: Option<String>,
    pub top_occupation: Option<String>,
    pub recent_entries: usize,
}

/// The per-record slice of data the dashboard needs.
#[derive(Debug, Clone)]
pub(crate) struct StatsRow {
    pub gender: String,
    pub current_location: Option<String>,
    pub current_occupation: Option<String>,
    pub date_of_entry: Option<Date>,
}

/// Most frequent value; ties broken by first-encountered order.
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, value) in values.enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .min_by_key(|&(_, (count, first_seen))| (std::cmp::Reverse(count), first_seen))
        .map(|(value, _)| value.to_owned())
}

pub(crate) fn compute_stats(rows: &[StatsRow], today: Date) -> DashboardStats {
    let male_count = rows.iter().filter(|r| r.gender == "Male").count();
    let female_count = rows.iter().filter(|r| r.gender == "Female").count();

    let top_location = most_frequent(rows.iter().filter_map(|r| r.current_location.as_deref()));
    let top_occupation = most_frequent(rows.iter().filter_map(|r| r.current_occupation.as_deref()));

    let cutoff = today
        .checked_sub(Duration::days(RECENT_WINDOW_DAYS))
        .unwrap_or(Date::MIN);
    let recent_entries = rows
        .iter()
        .filter(|r| r.date_of_entry.is_some_and(|entry| entry >= cutoff))
        .count();

    DashboardStats {
        total_profiles: rows.len(),
        male_count,
        female_count,
        other_count: rows.len() - male_count - female_count,
        top_location,
        top_occupation,
        recent_entries,
    }
}

/// Fetch the full record set and aggregate it.
///
/// # Errors
///
/// Returns a database error if the fetch fails.
pub async fn dashboard_stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
    let rows = sqlx::query_as::<_, (String, Option<String>, Option<String>, Option<Date>)>(
        "SELECT gender, current_location, current_occupation, date_of_entry \
         FROM profiles ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    let rows = rows
        .into_iter()
        .map(|(gender, current_location, current_occupation, date_of_entry)| StatsRow {
            gender,
            current_location,
            current_occupation,
            date_of_entry,
        })
        .collect::<Vec<_>>();

    Ok(compute_stats(&rows, OffsetDateTime::now_utc().date()))
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
