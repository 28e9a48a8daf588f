use axum::http::{Method, StatusCode};
use chrono::{TimeZone, Utc};
use medibook_core::models::hospital::{Doctor, Hospital};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

fn city_hospital() -> Hospital {
    Hospital {
        id: 1,
        name: "City Care Hospital".to_string(),
        address: "12 MG Road, Bengaluru".to_string(),
        consultation_fee: "₹500".to_string(),
        rating: "4.5".to_string(),
        experience: Some("15+ years".to_string()),
        wait_time: "20 mins".to_string(),
        contact: "+91 80 1234 5678".to_string(),
        ambulance: 3,
        blood: 12,
        oxygen: 40,
        beds: 25,
        latitude: 12.9716,
        longitude: 77.5946,
        specialities: vec!["Cardiology".to_string(), "Orthopedics".to_string()],
        about: None,
        next_available: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        verified: true,
        amenities: vec!["Pharmacy".to_string()],
        doctors: vec![Doctor {
            id: 10,
            name: "Dr. Asha Rao".to_string(),
            specialty: "Cardiology".to_string(),
            experience: "12 years".to_string(),
            hospital_id: 1,
        }],
    }
}

#[tokio::test]
async fn test_list_hospitals_with_doctors() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_hospitals()
        .times(1)
        .returning(|| Ok(vec![city_hospital()]));
    let server = ctx.into_server();

    let response = server.get("/api/hospital").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("access-control-allow-methods"), "GET, OPTIONS");

    let body: Value = response.json();
    let first = &body[0];
    assert_eq!(first["consultationFee"], json!("₹500"));
    assert_eq!(first["nextAvailable"], json!("2025-03-01T09:30:00.000Z"));
    assert_eq!(first["doctors"][0]["name"], json!("Dr. Asha Rao"));
    assert_eq!(first["doctors"][0]["hospitalId"], json!(1));
    assert!(first.get("passwordHash").is_none());
    assert!(first.get("email").is_none());
}

#[tokio::test]
async fn test_list_hospitals_empty_directory() {
    let mut ctx = TestContext::new();
    ctx.store.expect_list_hospitals().returning(|| Ok(Vec::new()));
    let server = ctx.into_server();

    let response = server.get("/api/hospital").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_hospitals_store_failure() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_hospitals()
        .returning(|| Err(eyre::eyre!("relation \"hospitals\" does not exist")));
    let server = ctx.into_server();

    let response = server.get("/api/hospital").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_hospital_directory_preflight() {
    let mut ctx = TestContext::new();
    ctx.store.expect_list_hospitals().never();
    let server = ctx.into_server();

    let response = server.method(Method::OPTIONS, "/api/hospital").await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("access-control-allow-headers"), "Content-Type");
}
