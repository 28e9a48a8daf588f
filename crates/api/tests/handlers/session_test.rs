use axum::http::{
    HeaderValue, Method, StatusCode,
    header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
};
use chrono::Utc;
use medibook_api::middleware::auth::hash_password;
use medibook_core::models::session::{HospitalCredentials, Session};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, bearer};

fn credentials(hospital_id: i32, password: &str) -> HospitalCredentials {
    HospitalCredentials {
        hospital_id,
        password_hash: Some(hash_password(password).unwrap()),
    }
}

#[tokio::test]
async fn test_login_success() {
    let stored = credentials(4, "front-desk");
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_credentials()
        .with(predicate::eq("desk4@hospital.test".to_string()))
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));
    ctx.store
        .expect_create_session()
        .withf(|hospital_id, expires_at| *hospital_id == 4 && *expires_at > Utc::now())
        .times(1)
        .returning(|hospital_id, expires_at| {
            Ok(Session {
                token: Uuid::new_v4(),
                hospital_id,
                created_at: Utc::now(),
                expires_at,
            })
        });
    let server = ctx.into_server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": " desk4@hospital.test ", "password": "front-desk" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["hospitalId"], json!(4));
    assert!(Uuid::parse_str(body["token"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let stored = credentials(4, "front-desk");
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_credentials()
        .returning(move |_| Ok(Some(stored.clone())));
    ctx.store.expect_create_session().never();
    let server = ctx.into_server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "desk4@hospital.test", "password": "guess" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Invalid email or password"));
}

#[tokio::test]
async fn test_login_unknown_email_looks_like_wrong_password() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_credentials().returning(|_| Ok(None));
    ctx.store.expect_create_session().never();
    let server = ctx.into_server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@hospital.test", "password": "guess" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Invalid email or password"));
}

#[tokio::test]
async fn test_login_account_without_password() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_credentials().returning(|_| {
        Ok(Some(HospitalCredentials {
            hospital_id: 9,
            password_hash: None,
        }))
    });
    ctx.store.expect_create_session().never();
    let server = ctx.into_server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "desk9@hospital.test", "password": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let token = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_session()
        .with(predicate::eq(token))
        .returning(|_| Ok(Some(crate::test_utils::principal(4))));
    ctx.store
        .expect_end_session()
        .with(predicate::eq(token))
        .times(1)
        .returning(|_| Ok(true));
    let server = ctx.into_server();

    let (name, value) = bearer(token);
    let response = server.post("/api/auth/logout").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_logout_without_session() {
    let mut ctx = TestContext::new();
    ctx.store.expect_end_session().never();
    let server = ctx.into_server();

    let response = server.post("/api/auth/logout").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_malformed_body_is_json_error() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_credentials().never();
    let server = ctx.into_server();

    let response = server.post("/api/auth/login").text("{\"email\": ").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Request body must be valid JSON"));
}

#[tokio::test]
async fn test_login_missing_password_is_json_error() {
    let mut ctx = TestContext::new();
    ctx.store.expect_find_credentials().never();
    let server = ctx.into_server();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "desk4@hospital.test" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_wildcard_origin_is_ignored_for_session_routes() {
    let origins = vec!["*".to_string(), "https://desk.example".to_string()];
    let server = TestContext::new().into_server_with_origins(&origins);

    let response = server
        .method(Method::OPTIONS, "/api/auth/login")
        .add_header(ORIGIN, HeaderValue::from_static("https://desk.example"))
        .add_header(
            ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(
        response.header("access-control-allow-origin"),
        "https://desk.example"
    );
    assert_eq!(response.header("access-control-allow-credentials"), "true");
}
