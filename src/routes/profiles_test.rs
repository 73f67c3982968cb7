use super::*;
use crate::routes::profile_error_response;
use crate::services::profile::{DEFAULT_PAGE_SIZE, FieldError, ProfileError};

// =============================================================================
// LIST PARAMETERS
// =============================================================================

#[test]
fn list_params_pass_through_known_values() {
    let query = ListQuery {
        sort_by: Some("age".to_owned()),
        order: Some("asc".to_owned()),
        name: Some("rah".to_owned()),
        limit: Some(25),
        offset: Some(50),
    };
    let params = list_params(&query);
    assert_eq!(params.sort_by, SortColumn::Age);
    assert_eq!(params.order, SortOrder::Asc);
    assert_eq!(params.name.as_deref(), Some("rah"));
    assert_eq!(params.limit, 25);
    assert_eq!(params.offset, 50);
}

#[test]
fn unknown_sort_falls_back_to_defaults() {
    let query = ListQuery {
        sort_by: Some("photo_url".to_owned()),
        order: Some("sideways".to_owned()),
        ..ListQuery::default()
    };
    let params = list_params(&query);
    assert_eq!(params.sort_by, SortColumn::CreatedAt);
    assert_eq!(params.order, SortOrder::Desc);
}

#[test]
fn absent_query_yields_defaults() {
    let params = list_params(&ListQuery::default());
    assert_eq!(params.limit, DEFAULT_PAGE_SIZE);
    assert_eq!(params.offset, 0);
    assert!(params.name.is_none());
}

// =============================================================================
// EXPORT COLUMN SELECTION
// =============================================================================

#[test]
fn parse_columns_accepts_known_subset() {
    let columns = parse_columns("name, gender ,age").unwrap();
    assert_eq!(columns, vec!["name", "gender", "age"]);
}

#[test]
fn parse_columns_rejects_unknown_column() {
    let err = parse_columns("name,id").unwrap_err();
    assert!(err.contains("id"));
}

#[test]
fn parse_columns_rejects_empty_selection() {
    assert!(parse_columns("").is_err());
    assert!(parse_columns(" , ,").is_err());
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    let (status, _) = profile_error_response("load profile", ProfileError::NotFound(Uuid::nil()));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn validation_maps_to_422_with_field_details() {
    let errors = vec![FieldError {
        field: "name",
        message: "Name must be at least 2 characters.".to_owned(),
    }];
    let (status, Json(body)) =
        profile_error_response("create profile", ProfileError::Validation(errors));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation failed");
    assert_eq!(body["fields"][0]["field"], "name");
}

#[test]
fn database_error_maps_to_500_with_generic_message() {
    let (status, Json(body)) =
        profile_error_response("delete profile", ProfileError::Database(sqlx::Error::PoolClosed));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // Backend details never reach the client.
    assert_eq!(body["error"], "failed to delete profile, please try again");
}
