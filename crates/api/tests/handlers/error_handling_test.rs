use axum::http::StatusCode;
use medibook_api::middleware::error_handling::{AppError, map_error};
use medibook_core::{
    errors::BookingError,
    validation::{FieldKind, FieldViolation},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[rstest]
#[case(BookingError::MissingLocation, StatusCode::BAD_REQUEST)]
#[case(BookingError::InvalidDate("31/02/2025".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::HospitalNotFound(12), StatusCode::BAD_REQUEST)]
#[case(BookingError::Validation("Invalid hospital ID".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::ForeignKeyViolation, StatusCode::BAD_REQUEST)]
#[case(BookingError::Constraint { code: "23514".to_string() }, StatusCode::BAD_REQUEST)]
#[case(BookingError::Authentication("Unauthorized".to_string()), StatusCode::UNAUTHORIZED)]
#[case(BookingError::Authorization("Forbidden".to_string()), StatusCode::FORBIDDEN)]
#[case(BookingError::NotFound("Appointment 3".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Database(eyre::eyre!("pool closed")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    assert_eq!(AppError(error).status(), expected);
}

#[tokio::test]
async fn test_error_handling_invalid_payload_body() {
    let error = BookingError::InvalidPayload(vec![FieldViolation {
        field: "phone",
        expected: FieldKind::Text,
    }]);

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({
            "error": "Invalid request data",
            "details": ["phone (expected string)"],
        })
    );
}

#[tokio::test]
async fn test_error_handling_internal_is_generic() {
    let error = BookingError::Internal("disk quota exceeded on /var/lib".into());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_health_reports_database_state() {
    let mut ctx = TestContext::new();
    ctx.store.expect_ping().times(1).returning(|| Ok(()));
    let server = ctx.into_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "ok", "database": "up" }));
}

#[tokio::test]
async fn test_health_degraded_when_database_down() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_ping()
        .returning(|| Err(eyre::eyre!("connection refused")));
    let server = ctx.into_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], json!("degraded"));
}
