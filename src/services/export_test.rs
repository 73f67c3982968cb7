use super::*;
use crate::services::profile::test_helpers::dummy_profile;
use time::macros::date;

/// Minimal RFC 4180 line parser used to prove the escaping round-trips.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if quoted {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    quoted = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            quoted = true;
        } else if c == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

// =============================================================================
// ESCAPING
// =============================================================================

#[test]
fn plain_values_pass_through() {
    assert_eq!(csv_field("Rahim Uddin"), "Rahim Uddin");
    assert_eq!(csv_field(""), "");
}

#[test]
fn comma_values_are_quoted() {
    assert_eq!(csv_field("Dhaka, Bangladesh"), "\"Dhaka, Bangladesh\"");
}

#[test]
fn quote_values_are_doubled() {
    assert_eq!(csv_field("alias \"Raju\""), "\"alias \"\"Raju\"\"\"");
}

#[test]
fn newline_values_are_quoted() {
    assert_eq!(csv_field("line one\nline two"), "\"line one\nline two\"");
}

#[test]
fn escaping_round_trips_through_csv_parse() {
    let cases = [
        "plain",
        "has, comma",
        "has \"quotes\"",
        "both, \"of\" them",
        "trailing comma,",
        "\"leading quote",
    ];
    for case in cases {
        let parsed = parse_csv_line(&csv_field(case));
        assert_eq!(parsed, vec![case.to_owned()], "round trip failed for {case:?}");
    }
}

// =============================================================================
// DOCUMENT SHAPE
// =============================================================================

#[test]
fn csv_lines_start_with_header() {
    let profiles = [dummy_profile("Rahim Uddin")];
    let lines = csv_lines(&EXPORT_COLUMNS, &profiles);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], EXPORT_COLUMNS.join(","));
}

#[test]
fn rows_follow_column_order() {
    let profiles = [dummy_profile("Rahim Uddin")];
    let lines = csv_lines(&["name", "gender", "age", "date_of_birth"], &profiles);
    assert_eq!(lines[1], "Rahim Uddin,Male,34,1991-06-12");
}

#[test]
fn booleans_render_yes_no() {
    let mut profile = dummy_profile("Rahim Uddin");
    assert_eq!(column_value(&profile, "embassy_contacted"), "No");
    profile.embassy_contacted = true;
    assert_eq!(column_value(&profile, "embassy_contacted"), "Yes");
}

#[test]
fn absent_optionals_render_empty() {
    let profile = dummy_profile("Rahim Uddin");
    assert_eq!(column_value(&profile, "criminal_background"), "");
    let lines = csv_lines(&["name", "criminal_background", "gender"], &[profile]);
    assert_eq!(lines[1], "Rahim Uddin,,Male");
}

#[test]
fn quoted_field_survives_row_serialization() {
    let mut profile = dummy_profile("Rahim Uddin");
    profile.last_known_address = Some("House 4, Road 7".to_owned());
    let lines = csv_lines(&["name", "last_known_address"], &[profile]);
    let parsed = parse_csv_line(&lines[1]);
    assert_eq!(parsed, vec!["Rahim Uddin".to_owned(), "House 4, Road 7".to_owned()]);
}

#[test]
fn key_value_export_covers_all_columns() {
    let profile = dummy_profile("Rahim Uddin");
    let lines = profile_key_values(&profile);
    assert_eq!(lines.len(), ALL_COLUMNS.len());
    assert!(lines.iter().any(|l| l == "name,Rahim Uddin"));
    assert!(lines.iter().any(|l| l == "embassy_contacted,No"));
    assert!(lines.iter().any(|l| l == &format!("id,{}", profile.id)));
}

// =============================================================================
// FILENAMES
// =============================================================================

#[test]
fn dated_filename_uses_iso_date() {
    assert_eq!(
        dated_filename("profiles-export", date!(2026 - 08 - 26)),
        "profiles-export-2026-08-26.csv"
    );
    assert_eq!(
        dated_filename("search-results", date!(2026 - 01 - 05)),
        "search-results-2026-01-05.csv"
    );
}

#[test]
fn profile_filename_dashes_whitespace() {
    assert_eq!(profile_filename("Rahim Uddin"), "profile-Rahim-Uddin.csv");
    assert_eq!(profile_filename("  Md   Karim  "), "profile-Md-Karim.csv");
}

#[test]
fn profile_filename_strips_hostile_characters() {
    assert_eq!(profile_filename("A\"B/C\\D"), "profile-ABCD.csv");
    assert_eq!(profile_filename("\"\""), "profile-record.csv");
}
