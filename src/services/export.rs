//! CSV export — escaped serialization and download filenames.
//!
//! DESIGN
//! ======
//! The whole result set is serialized synchronously in memory: a header line
//! of comma-joined field names, then one line per record. A value containing
//! a comma, double quote, or line break is wrapped in double quotes with
//! internal quotes doubled. Booleans render as Yes/No, absent optionals as
//! empty fields.

use time::Date;
use time::format_description::well_known::Rfc3339;

use crate::services::profile::{DATE_FORMAT, Profile};

/// Columns of the tabular exports, in the order the record form collects them.
pub const EXPORT_COLUMNS: [&str; 23] = [
    "name",
    "gender",
    "age",
    "date_of_birth",
    "language_spoken",
    "mode_of_entry",
    "entry_point",
    "date_of_entry",
    "assisting_network",
    "last_known_address",
    "current_location",
    "migration_pattern",
    "associated_locations",
    "current_occupation",
    "cover_identity",
    "support_network",
    "criminal_background",
    "case_registered",
    "detained_by",
    "court_proceedings_status",
    "embassy_contacted",
    "seized_ids",
    "intelligence_dossier",
];

/// Every column, including identity and photo metadata. Used by the single
/// record key/value export.
pub const ALL_COLUMNS: [&str; 27] = [
    "id",
    "created_at",
    "name",
    "gender",
    "age",
    "date_of_birth",
    "photo_url",
    "language_spoken",
    "physical_identifiers",
    "mode_of_entry",
    "entry_point",
    "date_of_entry",
    "assisting_network",
    "last_known_address",
    "current_location",
    "migration_pattern",
    "associated_locations",
    "current_occupation",
    "cover_identity",
    "support_network",
    "criminal_background",
    "case_registered",
    "detained_by",
    "court_proceedings_status",
    "embassy_contacted",
    "seized_ids",
    "intelligence_dossier",
];

/// Quote a field when it contains a comma, quote, or line break; double any
/// internal quotes.
#[must_use]
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

fn opt(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

/// Render one column of a profile as CSV text. Unknown columns render empty;
/// callers validate column names against [`EXPORT_COLUMNS`] first.
#[must_use]
pub fn column_value(profile: &Profile, column: &str) -> String {
    match column {
        "id" => profile.id.to_string(),
        "created_at" => profile.created_at.format(&Rfc3339).unwrap_or_default(),
        "name" => profile.name.clone(),
        "gender" => profile.gender.clone(),
        "age" => profile.age.to_string(),
        "date_of_birth" => format_date(profile.date_of_birth),
        "photo_url" => opt(profile.photo_url.as_deref()),
        "language_spoken" => opt(profile.language_spoken.as_deref()),
        "physical_identifiers" => opt(profile.physical_identifiers.as_deref()),
        "mode_of_entry" => opt(profile.mode_of_entry.as_deref()),
        "entry_point" => opt(profile.entry_point.as_deref()),
        "date_of_entry" => profile.date_of_entry.map(format_date).unwrap_or_default(),
        "assisting_network" => opt(profile.assisting_network.as_deref()),
        "last_known_address" => opt(profile.last_known_address.as_deref()),
        "current_location" => opt(profile.current_location.as_deref()),
        "migration_pattern" => opt(profile.migration_pattern.as_deref()),
        "associated_locations" => opt(profile.associated_locations.as_deref()),
        "current_occupation" => opt(profile.current_occupation.as_deref()),
        "cover_identity" => opt(profile.cover_identity.as_deref()),
        "support_network" => opt(profile.support_network.as_deref()),
        "criminal_background" => opt(profile.criminal_background.as_deref()),
        "case_registered" => opt(profile.case_registered.as_deref()),
        "detained_by" => opt(profile.detained_by.as_deref()),
        "court_proceedings_status" => opt(profile.court_proceedings_status.as_deref()),
        "embassy_contacted" => yes_no(profile.embassy_contacted).to_owned(),
        "seized_ids" => opt(profile.seized_ids.as_deref()),
        "intelligence_dossier" => opt(profile.intelligence_dossier.as_deref()),
        _ => String::new(),
    }
}

/// Serialize a record set as CSV lines: header first, then one line per
/// record in the given column order. Lines carry no trailing newline; the
/// delivery layer joins them.
#[must_use]
pub fn csv_lines(columns: &[&str], profiles: &[Profile]) -> Vec<String> {
    let mut lines = Vec::with_capacity(profiles.len() + 1);
    lines.push(columns.join(","));
    for profile in profiles {
        let row = columns
            .iter()
            .map(|column| csv_field(&column_value(profile, column)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }
    lines
}

/// Serialize one record as `key,value` lines over every column.
#[must_use]
pub fn profile_key_values(profile: &Profile) -> Vec<String> {
    ALL_COLUMNS
        .iter()
        .map(|column| format!("{column},{}", csv_field(&column_value(profile, column))))
        .collect()
}

/// `<context>-<YYYY-MM-DD>.csv` download name for bulk exports.
#[must_use]
pub fn dated_filename(context: &str, date: Date) -> String {
    format!("{context}-{}.csv", format_date(date))
}

/// `profile-<Name-With-Dashes>.csv` download name for a single record.
/// Whitespace runs become dashes; characters hostile to a header value are
/// dropped.
#[must_use]
pub fn profile_filename(name: &str) -> String {
    let cleaned = name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '/' && *c != '\\')
        .collect::<String>();
    let dashed = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    if dashed.is_empty() {
        "profile-record.csv".to_owned()
    } else {
        format!("profile-{dashed}.csv")
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
