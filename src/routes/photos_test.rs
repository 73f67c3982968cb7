use super::*;
use crate::state::test_helpers;

fn jpg_query() -> Query<UploadQuery> {
    Query(UploadQuery { ext: "jpg".to_owned() })
}

#[tokio::test]
async fn upload_stores_body_and_returns_created() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = upload_photo(State(state), jpg_query(), Bytes::from_static(b"image bytes"))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    let url = body["photo_url"].as_str().unwrap();
    assert!(url.starts_with("/photos/"));
    assert!(url.ends_with(".jpg"));
}

#[tokio::test]
async fn empty_body_is_rejected_with_400() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = upload_photo(State(state), jpg_query(), Bytes::new())
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "photo body is empty");
}

#[tokio::test]
async fn oversized_body_is_rejected_with_413() {
    let state = test_helpers::test_app_state();
    let body = Bytes::from(vec![0u8; MAX_PHOTO_BYTES + 1]);
    let (status, _) = upload_photo(State(state), jpg_query(), body).await.unwrap_err();

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unsupported_extension_is_rejected_with_400() {
    let state = test_helpers::test_app_state();
    let query = Query(UploadQuery { ext: "exe".to_owned() });
    let (status, Json(body)) = upload_photo(State(state), query, Bytes::from_static(b"x"))
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exe"));
}
