use super::*;
use time::macros::date;

fn row(gender: &str, location: Option<&str>, occupation: Option<&str>, entry: Option<Date>) -> StatsRow {
    StatsRow {
        gender: gender.to_owned(),
        current_location: location.map(str::to_owned),
        current_occupation: occupation.map(str::to_owned),
        date_of_entry: entry,
    }
}

const TODAY: Date = date!(2026 - 08 - 26);

// =============================================================================
// GENDER BUCKETS
// =============================================================================

#[test]
fn empty_rows_yield_zeroed_stats() {
    let stats = compute_stats(&[], TODAY);
    assert_eq!(
        stats,
        DashboardStats {
            total_profiles: 0,
            male_count: 0,
            female_count: 0,
            other_count: 0,
            top_location: None,
            top_occupation: None,
            recent_entries: 0,
        }
    );
}

#[test]
fn gender_buckets_are_exact_matches() {
    let rows = [
        row("Male", None, None, None),
        row("Female", None, None, None),
        row("male", None, None, None),
        row("Other", None, None, None),
        row("", None, None, None),
    ];
    let stats = compute_stats(&rows, TODAY);
    assert_eq!(stats.total_profiles, 5);
    assert_eq!(stats.male_count, 1);
    assert_eq!(stats.female_count, 1);
    // Anything that is not exactly "Male" or "Female" falls in the remainder.
    assert_eq!(stats.other_count, 3);
}

// =============================================================================
// MOST FREQUENT
// =============================================================================

#[test]
fn top_location_is_the_mode() {
    let rows = [
        row("Male", Some("Riverside"), None, None),
        row("Male", Some("Hilltop"), None, None),
        row("Male", Some("Riverside"), None, None),
    ];
    let stats = compute_stats(&rows, TODAY);
    assert_eq!(stats.top_location.as_deref(), Some("Riverside"));
}

#[test]
fn most_frequent_tie_breaks_on_first_encountered() {
    let rows = [
        row("Male", Some("Hilltop"), Some("Fishing"), None),
        row("Male", Some("Riverside"), Some("Day labor"), None),
        row("Male", Some("Riverside"), Some("Fishing"), None),
        row("Male", Some("Hilltop"), Some("Day labor"), None),
    ];
    let stats = compute_stats(&rows, TODAY);
    // Two-all ties resolve to whichever value appeared first in row order.
    assert_eq!(stats.top_location.as_deref(), Some("Hilltop"));
    assert_eq!(stats.top_occupation.as_deref(), Some("Fishing"));
}

#[test]
fn missing_values_do_not_count_toward_mode() {
    let rows = [
        row("Male", None, None, None),
        row("Male", None, None, None),
        row("Male", Some("Riverside"), None, None),
    ];
    let stats = compute_stats(&rows, TODAY);
    assert_eq!(stats.top_location.as_deref(), Some("Riverside"));
    assert_eq!(stats.top_occupation, None);
}

// =============================================================================
// RECENT ENTRIES
// =============================================================================

#[test]
fn recent_entries_use_trailing_thirty_days() {
    let rows = [
        row("Male", None, None, Some(date!(2026 - 08 - 26))),
        row("Male", None, None, Some(date!(2026 - 07 - 27))),
        row("Male", None, None, Some(date!(2026 - 07 - 26))),
        row("Male", None, None, Some(date!(2026 - 01 - 01))),
        row("Male", None, None, None),
    ];
    let stats = compute_stats(&rows, TODAY);
    // Cutoff is today minus 30 days inclusive: 2026-07-27 counts, 07-26 does not.
    assert_eq!(stats.recent_entries, 2);
}
