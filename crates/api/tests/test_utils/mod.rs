use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use medibook_api::{build_router, ApiState};
use medibook_core::models::{appointment::Appointment, session::Principal};
use medibook_db::mock::MockBookingStore;
use mockall::predicate;
use uuid::Uuid;

pub struct TestContext {
    pub store: MockBookingStore,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            store: MockBookingStore::new(),
        }
    }

    /// Registers a live session for `hospital_id` and returns the header
    /// that presents it.
    pub fn sign_in_as(&mut self, hospital_id: i32) -> (HeaderName, HeaderValue) {
        let token = Uuid::new_v4();
        self.store
            .expect_find_session()
            .with(predicate::eq(token))
            .returning(move |_| Ok(Some(principal(hospital_id))));
        bearer(token)
    }

    // Build the real router over the mock store
    pub fn into_server(self) -> TestServer {
        self.serve(None)
    }

    pub fn into_server_with_origins(self, origins: &[String]) -> TestServer {
        self.serve(Some(origins))
    }

    fn serve(self, origins: Option<&[String]>) -> TestServer {
        let state = Arc::new(ApiState::new(Arc::new(self.store), Duration::hours(24)));
        TestServer::new(build_router(state, origins)).expect("Failed to start test server")
    }
}

pub fn bearer(token: Uuid) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header");
    (AUTHORIZATION, value)
}

pub fn principal(hospital_id: i32) -> Principal {
    Principal {
        hospital_id,
        email: format!("desk{hospital_id}@hospital.test"),
        license_number: format!("LIC-{hospital_id:04}"),
    }
}

pub fn appointment(id: i32, hospital_id: i32, date: NaiveDate) -> Appointment {
    Appointment {
        id,
        patient: format!("Patient {id}"),
        phone: "9876543210".to_string(),
        symptoms: "Fever and cough".to_string(),
        latitude: 12.97,
        longitude: 77.59,
        date,
        time: "10:00 AM".to_string(),
        alert: Vec::new(),
        hospital_id,
        created_at: Utc.with_ymd_and_hms(2025, 1, 2, 8, 0, 0).unwrap(),
    }
}
