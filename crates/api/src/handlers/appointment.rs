//! # Appointment Handlers
//!
//! Patient-facing intake plus the hospital-scoped listing and deletion.
//!
//! Intake runs the payload rules from `medibook_core::validation`, then
//! checks that the hospital exists, then inserts. The check and the insert
//! are separate statements; the foreign key on `appointments.hospital_id` is
//! what finally rejects a hospital removed in between, and that rejection is
//! reported as a client error.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use medibook_core::{
    access::{authorize_listing, authorize_removal},
    errors::BookingError,
    models::appointment::{Appointment, DeleteAppointmentResponse},
    validation::validate_appointment,
};
use serde_json::Value;
use tracing::info;

use crate::{
    middleware::{auth::AuthContext, error_handling::AppError},
    ApiState,
};

/// Creates an appointment from an untyped JSON body.
///
/// # Endpoint
///
/// ```text
/// POST /api/appointments
/// ```
///
/// # Errors
///
/// * `400` - Shape violations (all listed), null coordinates, bad date,
///   unknown hospital, or a constraint rejected by the store
/// * `500` - Any other store failure
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        BookingError::Validation(format!("Request body must be valid JSON: {}", e))
    })?;

    let new_appointment = validate_appointment(&payload)?;

    let hospital_id = new_appointment.hospital_id;
    if !state.store.hospital_exists(hospital_id).await? {
        return Err(AppError(BookingError::HospitalNotFound(hospital_id)));
    }

    let appointment = state.store.create_appointment(new_appointment).await?;

    info!(
        "Created appointment {} for hospital {} on {}",
        appointment.id, appointment.hospital_id, appointment.date
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Lists a hospital's appointments, earliest date first.
///
/// # Endpoint
///
/// ```text
/// GET /api/hospital/:hospital_id/appointments
/// ```
#[axum::debug_handler]
pub async fn list_hospital_appointments(
    State(state): State<Arc<ApiState>>,
    auth: AuthContext,
    Path(hospital_id): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let hospital_id = authorize_listing(auth.principal(), &hospital_id)?;

    let appointments = state.store.list_appointments(hospital_id).await?;

    Ok(Json(appointments))
}

/// Deletes one appointment of the signed-in hospital.
///
/// The delete matches on both the appointment id and the hospital id, so an
/// appointment belonging to another hospital is left alone and reported as
/// not found.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/hospital/:hospital_id/appointments/:appointment_id
/// ```
#[axum::debug_handler]
pub async fn delete_hospital_appointment(
    State(state): State<Arc<ApiState>>,
    auth: AuthContext,
    Path((hospital_id, appointment_id)): Path<(String, String)>,
) -> Result<Json<DeleteAppointmentResponse>, AppError> {
    let target = authorize_removal(auth.principal(), &hospital_id, &appointment_id)?;

    let deleted = state
        .store
        .delete_appointment(target.appointment_id, target.hospital_id)
        .await?
        .ok_or_else(|| {
            BookingError::NotFound(format!(
                "Appointment {} not found for hospital {}",
                target.appointment_id, target.hospital_id
            ))
        })?;

    info!(
        "Hospital {} deleted appointment {}",
        target.hospital_id, deleted.id
    );
    Ok(Json(DeleteAppointmentResponse::new(deleted)))
}
