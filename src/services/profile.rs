//! Profile service — validation, CRUD, and listing for profile records.
//!
//! DESIGN
//! ======
//! Routes stay thin; this module owns the `profiles` table. Validation runs
//! before any insert or update and reports per-field messages so a form can
//! block submission entirely. `age` is derived from `date_of_birth` once at
//! creation and never recomputed afterwards, including on update.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Earliest accepted date of birth, matching the entry form's calendar floor.
const MIN_DATE_OF_BIRTH: Date = time::macros::date!(1900 - 01 - 01);

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One form-level validation failure, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// One row of the `profiles` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub name: String,
    pub gender: String,
    pub age: i32,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub photo_url: Option<String>,
    pub language_spoken: Option<String>,
    pub physical_identifiers: Option<String>,
    pub mode_of_entry: Option<String>,
    pub entry_point: Option<String>,
    #[serde(with = "iso_date::option")]
    pub date_of_entry: Option<Date>,
    pub assisting_network: Option<String>,
    pub last_known_address: Option<String>,
    pub current_location: Option<String>,
    pub migration_pattern: Option<String>,
    pub associated_locations: Option<String>,
    pub current_occupation: Option<String>,
    pub cover_identity: Option<String>,
    pub support_network: Option<String>,
    pub criminal_background: Option<String>,
    pub case_registered: Option<String>,
    pub detained_by: Option<String>,
    pub court_proceedings_status: Option<String>,
    pub embassy_contacted: bool,
    pub seized_ids: Option<String>,
    pub intelligence_dossier: Option<String>,
}

/// Column list matching [`Profile`] field order. Shared by every SELECT so
/// `query_as` always sees the full row.
pub(crate) const PROFILE_COLUMNS: &str = "id, created_at, name, gender, age, date_of_birth, photo_url, \
     language_spoken, physical_identifiers, mode_of_entry, entry_point, date_of_entry, \
     assisting_network, last_known_address, current_location, migration_pattern, \
     associated_locations, current_occupation, cover_identity, support_network, \
     criminal_background, case_registered, detained_by, court_proceedings_status, \
     embassy_contacted, seized_ids, intelligence_dossier";

/// Incoming record from the entry form. Dates arrive as `YYYY-MM-DD` strings
/// so malformed input surfaces as a per-field message instead of a generic
/// body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: String,
    pub photo_url: Option<String>,
    pub language_spoken: Option<String>,
    pub physical_identifiers: Option<String>,
    pub mode_of_entry: Option<String>,
    pub entry_point: Option<String>,
    pub date_of_entry: Option<String>,
    pub assisting_network: Option<String>,
    pub last_known_address: Option<String>,
    pub current_location: Option<String>,
    pub migration_pattern: Option<String>,
    pub associated_locations: Option<String>,
    pub current_occupation: Option<String>,
    pub cover_identity: Option<String>,
    pub support_network: Option<String>,
    pub criminal_background: Option<String>,
    pub case_registered: Option<String>,
    pub detained_by: Option<String>,
    pub court_proceedings_status: Option<String>,
    #[serde(default)]
    pub embassy_contacted: bool,
    pub seized_ids: Option<String>,
    pub intelligence_dossier: Option<String>,
}

/// Serde collapses `null` and "field absent" into the same outer `None` for a
/// plain `Option<Option<T>>`. Deserializing the inner option and wrapping it
/// keeps the two apart: a present `null` becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update. Outer `None` means "leave unchanged"; for nullable fields
/// an explicit JSON `null` (`Some(None)`) clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub language_spoken: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub physical_identifiers: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub mode_of_entry: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub entry_point: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_of_entry: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub assisting_network: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_known_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub current_location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub migration_pattern: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub associated_locations: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub current_occupation: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_identity: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub support_network: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub criminal_background: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub case_registered: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub detained_by: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub court_proceedings_status: Option<Option<String>>,
    pub embassy_contacted: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub seized_ids: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub intelligence_dossier: Option<Option<String>>,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Derive age from date of birth: naive year subtraction, decremented when
/// the birthday has not yet occurred this year.
#[must_use]
pub fn derive_age(date_of_birth: Date, today: Date) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (u8::from(today.month()), today.day()) < (u8::from(date_of_birth.month()), date_of_birth.day()) {
        age -= 1;
    }
    age
}

fn parse_date(field: &'static str, value: &str, errors: &mut Vec<FieldError>) -> Option<Date> {
    match Date::parse(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, "Enter a valid date in YYYY-MM-DD format."));
            None
        }
    }
}

fn validate_name(name: &str, errors: &mut Vec<FieldError>) {
    if name.trim().chars().count() < 2 {
        errors.push(FieldError::new("name", "Name must be at least 2 characters."));
    }
}

fn validate_gender(gender: &str, errors: &mut Vec<FieldError>) {
    if gender.trim().is_empty() {
        errors.push(FieldError::new("gender", "Please select a gender."));
    }
}

/// Validate a new record and parse its date fields.
///
/// # Errors
///
/// Returns every failed check as a per-field message; any failure blocks the
/// insert entirely.
pub fn validate_new_profile(new: &NewProfile, today: Date) -> Result<(Date, Option<Date>), Vec<FieldError>> {
    let mut errors = Vec::new();

    validate_name(&new.name, &mut errors);
    validate_gender(&new.gender, &mut errors);

    let date_of_birth = if new.date_of_birth.trim().is_empty() {
        errors.push(FieldError::new("date_of_birth", "Date of birth is required."));
        None
    } else {
        parse_date("date_of_birth", new.date_of_birth.trim(), &mut errors).and_then(|date| {
            if date > today {
                errors.push(FieldError::new("date_of_birth", "Date of birth cannot be in the future."));
                None
            } else if date < MIN_DATE_OF_BIRTH {
                errors.push(FieldError::new("date_of_birth", "Date of birth cannot be before 1900."));
                None
            } else {
                Some(date)
            }
        })
    };

    let date_of_entry = match new.date_of_entry.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => parse_date("date_of_entry", raw, &mut errors).and_then(|date| {
            if date > today {
                errors.push(FieldError::new("date_of_entry", "Date of entry cannot be in the future."));
                None
            } else {
                Some(date)
            }
        }),
    };

    if errors.is_empty() {
        // date_of_birth is Some here: every None path pushed an error.
        Ok((date_of_birth.unwrap_or(MIN_DATE_OF_BIRTH), date_of_entry))
    } else {
        Err(errors)
    }
}

// =============================================================================
// CRUD
// =============================================================================

/// Validate and insert one profile. Age is derived here, at creation time.
///
/// # Errors
///
/// Returns `Validation` with per-field messages, or a database error if the
/// insert fails.
pub async fn create_profile(pool: &PgPool, new: NewProfile) -> Result<Profile, ProfileError> {
    let now = OffsetDateTime::now_utc();
    let (date_of_birth, date_of_entry) =
        validate_new_profile(&new, now.date()).map_err(ProfileError::Validation)?;

    let profile = Profile {
        id: Uuid::new_v4(),
        created_at: now,
        name: new.name.trim().to_owned(),
        gender: new.gender.trim().to_owned(),
        age: derive_age(date_of_birth, now.date()),
        date_of_birth,
        photo_url: new.photo_url,
        language_spoken: new.language_spoken,
        physical_identifiers: new.physical_identifiers,
        mode_of_entry: new.mode_of_entry,
        entry_point: new.entry_point,
        date_of_entry,
        assisting_network: new.assisting_network,
        last_known_address: new.last_known_address,
        current_location: new.current_location,
        migration_pattern: new.migration_pattern,
        associated_locations: new.associated_locations,
        current_occupation: new.current_occupation,
        cover_identity: new.cover_identity,
        support_network: new.support_network,
        criminal_background: new.criminal_background,
        case_registered: new.case_registered,
        detained_by: new.detained_by,
        court_proceedings_status: new.court_proceedings_status,
        embassy_contacted: new.embassy_contacted,
        seized_ids: new.seized_ids,
        intelligence_dossier: new.intelligence_dossier,
    };

    sqlx::query(
        "INSERT INTO profiles (id, created_at, name, gender, age, date_of_birth, photo_url, \
             language_spoken, physical_identifiers, mode_of_entry, entry_point, date_of_entry, \
             assisting_network, last_known_address, current_location, migration_pattern, \
             associated_locations, current_occupation, cover_identity, support_network, \
             criminal_background, case_registered, detained_by, court_proceedings_status, \
             embassy_contacted, seized_ids, intelligence_dossier) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20, $21, $22, $23, $24, $25, $26, $27)",
    )
    .bind(profile.id)
    .bind(profile.created_at)
    .bind(&profile.name)
    .bind(&profile.gender)
    .bind(profile.age)
    .bind(profile.date_of_birth)
    .bind(&profile.photo_url)
    .bind(&profile.language_spoken)
    .bind(&profile.physical_identifiers)
    .bind(&profile.mode_of_entry)
    .bind(&profile.entry_point)
    .bind(profile.date_of_entry)
    .bind(&profile.assisting_network)
    .bind(&profile.last_known_address)
    .bind(&profile.current_location)
    .bind(&profile.migration_pattern)
    .bind(&profile.associated_locations)
    .bind(&profile.current_occupation)
    .bind(&profile.cover_identity)
    .bind(&profile.support_network)
    .bind(&profile.criminal_background)
    .bind(&profile.case_registered)
    .bind(&profile.detained_by)
    .bind(&profile.court_proceedings_status)
    .bind(profile.embassy_contacted)
    .bind(&profile.seized_ids)
    .bind(&profile.intelligence_dossier)
    .execute(pool)
    .await?;

    info!(id = %profile.id, name = %profile.name, "profile created");
    Ok(profile)
}

/// Fetch one profile by ID.
///
/// # Errors
///
/// Returns `NotFound` if no row matches.
pub async fn get_profile(pool: &PgPool, id: Uuid) -> Result<Profile, ProfileError> {
    let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
    sqlx::query_as::<_, Profile>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ProfileError::NotFound(id))
}

/// Apply a partial update. `age` is intentionally never recomputed, even when
/// `date_of_birth` changes.
///
/// # Errors
///
/// Returns `NotFound`, `Validation` with per-field messages, or a database
/// error if the update fails.
pub async fn update_profile(pool: &PgPool, id: Uuid, update: UpdateProfile) -> Result<Profile, ProfileError> {
    let mut profile = get_profile(pool, id).await?;
    let today = OffsetDateTime::now_utc().date();
    let mut errors = Vec::new();

    if let Some(name) = update.name {
        validate_name(&name, &mut errors);
        profile.name = name.trim().to_owned();
    }
    if let Some(gender) = update.gender {
        validate_gender(&gender, &mut errors);
        profile.gender = gender.trim().to_owned();
    }
    if let Some(raw) = update.date_of_birth {
        if let Some(date) = parse_date("date_of_birth", raw.trim(), &mut errors) {
            if date > today || date < MIN_DATE_OF_BIRTH {
                errors.push(FieldError::new(
                    "date_of_birth",
                    "Date of birth must be between 1900 and today.",
                ));
            } else {
                profile.date_of_birth = date;
            }
        }
    }
    if let Some(entry) = update.date_of_entry {
        profile.date_of_entry = match entry.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => parse_date("date_of_entry", raw, &mut errors).and_then(|date| {
                if date > today {
                    errors.push(FieldError::new("date_of_entry", "Date of entry cannot be in the future."));
                    None
                } else {
                    Some(date)
                }
            }),
        };
    }

    if let Some(value) = update.photo_url {
        profile.photo_url = value;
    }
    if let Some(value) = update.language_spoken {
        profile.language_spoken = value;
    }
    if let Some(value) = update.physical_identifiers {
        profile.physical_identifiers = value;
    }
    if let Some(value) = update.mode_of_entry {
        profile.mode_of_entry = value;
    }
    if let Some(value) = update.entry_point {
        profile.entry_point = value;
    }
    if let Some(value) = update.assisting_network {
        profile.assisting_network = value;
    }
    if let Some(value) = update.last_known_address {
        profile.last_known_address = value;
    }
    if let Some(value) = update.current_location {
        profile.current_location = value;
    }
    if let Some(value) = update.migration_pattern {
        profile.migration_pattern = value;
    }
    if let Some(value) = update.associated_locations {
        profile.associated_locations = value;
    }
    if let Some(value) = update.current_occupation {
        profile.current_occupation = value;
    }
    if let Some(value) = update.cover_identity {
        profile.cover_identity = value;
    }
    if let Some(value) = update.support_network {
        profile.support_network = value;
    }
    if let Some(value) = update.criminal_background {
        profile.criminal_background = value;
    }
    if let Some(value) = update.case_registered {
        profile.case_registered = value;
    }
    if let Some(value) = update.detained_by {
        profile.detained_by = value;
    }
    if let Some(value) = update.court_proceedings_status {
        profile.court_proceedings_status = value;
    }
    if let Some(value) = update.embassy_contacted {
        profile.embassy_contacted = value;
    }
    if let Some(value) = update.seized_ids {
        profile.seized_ids = value;
    }
    if let Some(value) = update.intelligence_dossier {
        profile.intelligence_dossier = value;
    }

    if !errors.is_empty() {
        return Err(ProfileError::Validation(errors));
    }

    sqlx::query(
        "UPDATE profiles SET name = $2, gender = $3, date_of_birth = $4, photo_url = $5, \
             language_spoken = $6, physical_identifiers = $7, mode_of_entry = $8, entry_point = $9, \
             date_of_entry = $10, assisting_network = $11, last_known_address = $12, \
             current_location = $13, migration_pattern = $14, associated_locations = $15, \
             current_occupation = $16, cover_identity = $17, support_network = $18, \
             criminal_background = $19, case_registered = $20, detained_by = $21, \
             court_proceedings_status = $22, embassy_contacted = $23, seized_ids = $24, \
             intelligence_dossier = $25 \
         WHERE id = $1",
    )
    .bind(profile.id)
    .bind(&profile.name)
    .bind(&profile.gender)
    .bind(profile.date_of_birth)
    .bind(&profile.photo_url)
    .bind(&profile.language_spoken)
    .bind(&profile.physical_identifiers)
    .bind(&profile.mode_of_entry)
    .bind(&profile.entry_point)
    .bind(profile.date_of_entry)
    .bind(&profile.assisting_network)
    .bind(&profile.last_known_address)
    .bind(&profile.current_location)
    .bind(&profile.migration_pattern)
    .bind(&profile.associated_locations)
    .bind(&profile.current_occupation)
    .bind(&profile.cover_identity)
    .bind(&profile.support_network)
    .bind(&profile.criminal_background)
    .bind(&profile.case_registered)
    .bind(&profile.detained_by)
    .bind(&profile.court_proceedings_status)
    .bind(profile.embassy_contacted)
    .bind(&profile.seized_ids)
    .bind(&profile.intelligence_dossier)
    .execute(pool)
    .await?;

    Ok(profile)
}

/// Hard delete one profile. Succeeds only once the database confirms a row
/// was removed, so callers can safely drop the record from local state.
///
/// # Errors
///
/// Returns `NotFound` if no row matches, or a database error.
pub async fn delete_profile(pool: &PgPool, id: Uuid) -> Result<(), ProfileError> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ProfileError::NotFound(id));
    }

    info!(%id, "profile deleted");
    Ok(())
}

// =============================================================================
// LISTING
// =============================================================================

/// Columns the table view may sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Gender,
    Age,
    CurrentLocation,
    DateOfEntry,
    CreatedAt,
}

impl SortColumn {
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "gender" => Some(Self::Gender),
            "age" => Some(Self::Age),
            "current_location" => Some(Self::CurrentLocation),
            "date_of_entry" => Some(Self::DateOfEntry),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::CurrentLocation => "current_location",
            Self::DateOfEntry => "date_of_entry",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 200;

#[derive(Debug, Clone)]
pub struct ListParams {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    /// Case-insensitive substring filter on the name column only.
    pub name: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            sort_by: SortColumn::CreatedAt,
            order: SortOrder::Desc,
            name: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// One page of the table view plus the total matching count.
#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub profiles: Vec<Profile>,
    pub total: i64,
}

fn push_name_filter(builder: &mut QueryBuilder<'_, Postgres>, name: &str) {
    builder.push(" WHERE name ILIKE ");
    builder.push_bind(crate::services::search::like_pattern(name));
}

/// Sorted, filtered, paginated listing backed by the query layer.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_profiles(pool: &PgPool, params: &ListParams) -> Result<ProfilePage, ProfileError> {
    let name = params
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {PROFILE_COLUMNS} FROM profiles"));
    if let Some(name) = name {
        push_name_filter(&mut builder, name);
    }
    builder.push(format!(
        " ORDER BY {} {} NULLS LAST, id ASC",
        params.sort_by.as_sql(),
        params.order.as_sql()
    ));
    builder.push(" LIMIT ");
    builder.push_bind(params.limit.clamp(1, MAX_PAGE_SIZE));
    builder.push(" OFFSET ");
    builder.push_bind(params.offset.max(0));

    let profiles = builder.build_query_as::<Profile>().fetch_all(pool).await?;

    let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM profiles");
    if let Some(name) = name {
        push_name_filter(&mut count_builder, name);
    }
    let total = count_builder
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await?;

    Ok(ProfilePage { profiles, total })
}

/// Full record set, newest first, with the table view's optional name filter.
/// Used by the CSV exports, which carry no pagination.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_all(pool: &PgPool, name: Option<&str>) -> Result<Vec<Profile>, ProfileError> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {PROFILE_COLUMNS} FROM profiles"));
    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        push_name_filter(&mut builder, name);
    }
    builder.push(" ORDER BY created_at DESC, id ASC");

    Ok(builder.build_query_as::<Profile>().fetch_all(pool).await?)
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a dummy `Profile` for testing.
    #[must_use]
    pub fn dummy_profile(name: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            created_at: time::macros::datetime!(2026-01-15 12:00:00 UTC),
            name: name.to_owned(),
            gender: "Male".to_owned(),
            age: 34,
            date_of_birth: time::macros::date!(1991 - 06 - 12),
            photo_url: None,
            language_spoken: Some("Bengali".to_owned()),
            physical_identifiers: None,
            mode_of_entry: Some("Land border".to_owned()),
            entry_point: Some("Sector 7".to_owned()),
            date_of_entry: Some(time::macros::date!(2025 - 11 - 02)),
            assisting_network: None,
            last_known_address: None,
            current_location: Some("Riverside".to_owned()),
            migration_pattern: None,
            associated_locations: None,
            current_occupation: Some("Day labor".to_owned()),
            cover_identity: None,
            support_network: None,
            criminal_background: None,
            case_registered: None,
            detained_by: None,
            court_proceedings_status: None,
            embassy_contacted: false,
            seized_ids: None,
            intelligence_dossier: None,
        }
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
