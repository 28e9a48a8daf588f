use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub patient: String,
    pub phone: String,
    pub symptoms: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub time: String,
    pub alert: Vec<String>,
    pub hospital_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A booking request that passed intake validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient: String,
    pub phone: String,
    pub symptoms: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub alert: Vec<String>,
    pub hospital_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAppointmentResponse {
    pub message: String,
    pub deleted_appointment: Appointment,
}

impl DeleteAppointmentResponse {
    pub fn new(deleted_appointment: Appointment) -> Self {
        Self {
            message: "Appointment deleted successfully".to_string(),
            deleted_appointment,
        }
    }
}
