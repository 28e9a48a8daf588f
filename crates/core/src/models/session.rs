use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated hospital account behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub hospital_id: i32,
    pub email: String,
    pub license_number: String,
}

impl Principal {
    /// Compares against a hospital id as it appears in a request path.
    pub fn is_hospital(&self, hospital_id: &str) -> bool {
        self.hospital_id.to_string() == hospital_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Uuid,
    pub hospital_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Stored login material for a hospital account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalCredentials {
    pub hospital_id: i32,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: Uuid,
    pub hospital_id: i32,
    pub expires_at: DateTime<Utc>,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            hospital_id: session.hospital_id,
            expires_at: session.expires_at,
        }
    }
}
