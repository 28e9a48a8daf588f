use chrono::{DateTime, NaiveDate, Utc};
use medibook_core::models::{
    appointment::Appointment,
    hospital::{Doctor, Hospital},
    session::{HospitalCredentials, Principal, Session},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
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

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Self {
            id: row.id,
            patient: row.patient,
            phone: row.phone,
            symptoms: row.symptoms,
            latitude: row.latitude,
            longitude: row.longitude,
            date: row.date,
            time: row.time,
            alert: row.alert,
            hospital_id: row.hospital_id,
            created_at: row.created_at,
        }
    }
}

/// Directory columns of the `hospitals` table. Account columns are read
/// through [`DbHospitalAccount`] only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbHospital {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub consultation_fee: String,
    pub rating: String,
    pub experience: Option<String>,
    pub wait_time: String,
    pub contact: String,
    pub ambulance: i32,
    pub blood: i32,
    pub oxygen: i32,
    pub beds: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub specialities: Vec<String>,
    pub about: Option<String>,
    pub next_available: DateTime<Utc>,
    pub verified: bool,
    pub amenities: Vec<String>,
}

impl DbHospital {
    pub fn into_hospital(self, doctors: Vec<Doctor>) -> Hospital {
        Hospital {
            id: self.id,
            name: self.name,
            address: self.address,
            consultation_fee: self.consultation_fee,
            rating: self.rating,
            experience: self.experience,
            wait_time: self.wait_time,
            contact: self.contact,
            ambulance: self.ambulance,
            blood: self.blood,
            oxygen: self.oxygen,
            beds: self.beds,
            latitude: self.latitude,
            longitude: self.longitude,
            specialities: self.specialities,
            about: self.about,
            next_available: self.next_available,
            verified: self.verified,
            amenities: self.amenities,
            doctors,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbHospitalAccount {
    pub id: i32,
    pub email: String,
    pub license_number: String,
    pub password_hash: Option<String>,
}

impl From<DbHospitalAccount> for HospitalCredentials {
    fn from(row: DbHospitalAccount) -> Self {
        Self {
            hospital_id: row.id,
            password_hash: row.password_hash,
        }
    }
}

impl From<DbHospitalAccount> for Principal {
    fn from(row: DbHospitalAccount) -> Self {
        Self {
            hospital_id: row.id,
            email: row.email,
            license_number: row.license_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctor {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub hospital_id: i32,
}

impl From<DbDoctor> for Doctor {
    fn from(row: DbDoctor) -> Self {
        Self {
            id: row.id,
            name: row.name,
            specialty: row.specialty,
            experience: row.experience,
            hospital_id: row.hospital_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub token: Uuid,
    pub hospital_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<DbSession> for Session {
    fn from(row: DbSession) -> Self {
        Self {
            token: row.token,
            hospital_id: row.hospital_id,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}
