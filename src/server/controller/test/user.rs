use super::*;
use crate::{model::user::CreateUserDto, server::controller::user::create_user};

/// Tests creating a user through the handler.
///
/// Expected: 201 with the stored email and a generated ID
#[tokio::test]
async fn creates_user() {
    let (_test, state) = setup(Platform::Dev).await;

    let response = create_user(
        State(state),
        dto_body(&CreateUserDto {
            email: "walt@breakingbad.com".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], "walt@breakingbad.com");
    assert!(body["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert!(body["created_at"].is_string());
    assert_eq!(body["created_at"], body["updated_at"]);
}

/// Tests creating a user with a blank email.
///
/// Expected: 400 with an error message
#[tokio::test]
async fn rejects_blank_email() {
    let (_test, state) = setup(Platform::Dev).await;

    let response = create_user(
        State(state),
        dto_body(&CreateUserDto {
            email: "  ".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Email is required" })
    );
}

/// Tests creating a user whose email is already registered.
///
/// Expected: 409 with an error message
#[tokio::test]
async fn rejects_duplicate_email() {
    let (_test, state) = setup(Platform::Dev).await;
    factory::user::create_user_with_email(&state.db, "walt@breakingbad.com")
        .await
        .unwrap();

    let response = create_user(
        State(state),
        dto_body(&CreateUserDto {
            email: "walt@breakingbad.com".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Tests the users route with an undecodable body.
///
/// Expected: 500 with an empty body
#[tokio::test]
async fn malformed_json_is_server_error() {
    let (_test, state) = setup(Platform::Dev).await;

    let response = router::app(state, ".")
        .oneshot(json_request("/api/users", "not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
}

/// Tests the users route with a JSON object missing `email`.
///
/// Expected: 400 with an error message
#[tokio::test]
async fn missing_email_field_is_bad_request() {
    let (_test, state) = setup(Platform::Dev).await;

    let response = router::app(state, ".")
        .oneshot(untyped_request("/api/users", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Email is required" })
    );
}
