//! Tests for the users HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::{json, Value};

use super::*;
use crate::domain::ports::{
    FixtureTaskRepository, MockUserRepository, UserRepository, UserRepositoryError,
};
use crate::domain::UserLookup;

fn sample_user() -> User {
    User {
        id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".into(),
        email: "ada@example.com".into(),
        created_at: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).single().expect("valid timestamp"),
    }
}

fn test_app(
    repo: MockUserRepository,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::with_repositories(
        Arc::new(repo) as Arc<dyn UserRepository>,
        Arc::new(FixtureTaskRepository),
    );
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api")
            .service(check_user)
            .service(create_user)
            .service(get_user),
    )
}

async fn error_body(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("error payload")
}

#[rstest]
#[case("/api/users/check")]
#[case("/api/users/check?email=")]
#[actix_web::test]
async fn check_user_requires_email_parameter(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(MockUserRepository::new())).await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = error_body(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Email is required")
    );
}

#[actix_web::test]
async fn check_user_rejects_malformed_email_without_touching_store() {
    let mut repo = MockUserRepository::new();
    repo.expect_check_user_exists().times(0);
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/check?email=not-an-email")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = error_body(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Invalid email format")
    );
}

#[actix_web::test]
async fn check_user_reports_existing_user_in_camel_case() {
    let mut repo = MockUserRepository::new();
    repo.expect_check_user_exists()
        .returning(|_| Ok(UserLookup::found(sample_user())));
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/check?email=ada@example.com")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    assert_eq!(value.get("exists").and_then(Value::as_bool), Some(true));
    let user = value.get("user").expect("user present");
    assert_eq!(
        user.get("createdAt").and_then(Value::as_str),
        Some("2026-08-20T12:00:00Z")
    );
    assert!(user.get("created_at").is_none());
}

#[actix_web::test]
async fn check_user_omits_user_field_on_miss() {
    let mut repo = MockUserRepository::new();
    repo.expect_check_user_exists()
        .returning(|_| Ok(UserLookup::missing()));
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/check?email=new@example.com")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    assert_eq!(value.get("exists").and_then(Value::as_bool), Some(false));
    assert!(value.get("user").is_none());
}

#[actix_web::test]
async fn create_user_requires_email_field() {
    let app = actix_test::init_service(test_app(MockUserRepository::new())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = error_body(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Email is required")
    );
}

#[actix_web::test]
async fn create_user_returns_409_for_existing_email() {
    let mut repo = MockUserRepository::new();
    repo.expect_check_user_exists()
        .returning(|_| Ok(UserLookup::found(sample_user())));
    repo.expect_create().times(0);
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"email": "ada@example.com"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let value = error_body(response).await;
    assert_eq!(value.get("code").and_then(Value::as_str), Some("conflict"));
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("User already exists")
    );
}

#[actix_web::test]
async fn create_user_returns_201_with_created_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_check_user_exists()
        .returning(|_| Ok(UserLookup::missing()));
    repo.expect_create().returning(|_| Ok(sample_user()));
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"email": "ada@example.com"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    assert_eq!(
        value.get("email").and_then(Value::as_str),
        Some("ada@example.com")
    );
    assert!(value.get("id").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn get_user_rejects_whitespace_identifier() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(0);
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/%20%20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value = error_body(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("User ID is required")
    );
}

#[actix_web::test]
async fn get_user_returns_404_for_unknown_identifier() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/missing-id")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = error_body(response).await;
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("User not found")
    );
}

#[actix_web::test]
async fn get_user_returns_known_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|_| Ok(Some(sample_user())));
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/3fa85f64-5717-4562-b3fc-2c963f66afa6")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = actix_test::read_body(response).await;
    let value: Value = serde_json::from_slice(&body).expect("response JSON");
    assert_eq!(
        value.get("id").and_then(Value::as_str),
        Some("3fa85f64-5717-4562-b3fc-2c963f66afa6")
    );
}

#[actix_web::test]
async fn store_outage_maps_to_service_unavailable() {
    let mut repo = MockUserRepository::new();
    repo.expect_check_user_exists()
        .returning(|_| Err(UserRepositoryError::connection("pool exhausted")));
    let app = actix_test::init_service(test_app(repo)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/users/check?email=ada@example.com")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let value = error_body(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("service_unavailable")
    );
}
