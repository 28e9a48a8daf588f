//! # Booking store
//!
//! [`BookingStore`] is the persistence surface the API handlers depend on.
//! [`PgStore`] implements it over the repository functions; tests substitute
//! the generated [`MockBookingStore`].
//!
//! Write methods classify integrity failures through
//! [`crate::violation::classify`], so a rejected foreign key surfaces as a
//! `ConstraintViolation` inside the returned report.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use mockall::automock;
use medibook_core::models::{
    appointment::{Appointment, NewAppointment},
    hospital::Hospital,
    session::{HospitalCredentials, Principal, Session},
};
use uuid::Uuid;

use crate::{DbPool, repositories};

#[automock]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Round-trips the connection; used by the health endpoint.
    async fn ping(&self) -> Result<()>;

    async fn hospital_exists(&self, hospital_id: i32) -> Result<bool>;

    async fn list_hospitals(&self) -> Result<Vec<Hospital>>;

    async fn create_appointment(&self, appointment: NewAppointment) -> Result<Appointment>;

    /// Appointments of one hospital ordered by date ascending.
    async fn list_appointments(&self, hospital_id: i32) -> Result<Vec<Appointment>>;

    /// Deletes the row matching both ids; `None` when there is no such row.
    async fn delete_appointment(
        &self,
        appointment_id: i32,
        hospital_id: i32,
    ) -> Result<Option<Appointment>>;

    async fn find_credentials(&self, email: String) -> Result<Option<HospitalCredentials>>;

    async fn create_session(&self, hospital_id: i32, expires_at: DateTime<Utc>) -> Result<Session>;

    /// Resolves a live session token to its principal.
    async fn find_session(&self, token: Uuid) -> Result<Option<Principal>>;

    async fn end_session(&self, token: Uuid) -> Result<bool>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn hospital_exists(&self, hospital_id: i32) -> Result<bool> {
        repositories::hospital::hospital_exists(&self.pool, hospital_id).await
    }

    async fn list_hospitals(&self) -> Result<Vec<Hospital>> {
        repositories::hospital::get_hospitals_with_doctors(&self.pool).await
    }

    async fn create_appointment(&self, appointment: NewAppointment) -> Result<Appointment> {
        let row = repositories::appointment::create_appointment(&self.pool, &appointment).await?;
        Ok(row.into())
    }

    async fn list_appointments(&self, hospital_id: i32) -> Result<Vec<Appointment>> {
        let rows =
            repositories::appointment::get_appointments_by_hospital_id(&self.pool, hospital_id)
                .await?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn delete_appointment(
        &self,
        appointment_id: i32,
        hospital_id: i32,
    ) -> Result<Option<Appointment>> {
        let row = repositories::appointment::delete_appointment_for_hospital(
            &self.pool,
            appointment_id,
            hospital_id,
        )
        .await?;
        Ok(row.map(Appointment::from))
    }

    async fn find_credentials(&self, email: String) -> Result<Option<HospitalCredentials>> {
        let account = repositories::hospital::get_account_by_email(&self.pool, &email).await?;
        Ok(account.map(HospitalCredentials::from))
    }

    async fn create_session(&self, hospital_id: i32, expires_at: DateTime<Utc>) -> Result<Session> {
        let pruned = repositories::session::delete_expired_sessions(&self.pool).await?;
        if pruned > 0 {
            tracing::debug!("Pruned {} expired sessions", pruned);
        }

        let row = repositories::session::create_session(&self.pool, hospital_id, expires_at).await?;
        Ok(row.into())
    }

    async fn find_session(&self, token: Uuid) -> Result<Option<Principal>> {
        let account = repositories::session::get_account_by_session(&self.pool, token).await?;
        Ok(account.map(Principal::from))
    }

    async fn end_session(&self, token: Uuid) -> Result<bool> {
        repositories::session::delete_session(&self.pool, token).await
    }
}
