//! Hospital-scoped authorization rules.
//!
//! Both checks take the principal explicitly, `None` meaning the request
//! carried no valid session, together with the raw path segments.

use crate::{
    errors::{BookingError, BookingResult},
    models::session::Principal,
};

/// Parameters of a delete request that passed authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalTarget {
    pub hospital_id: i32,
    pub appointment_id: i32,
}

fn parse_hospital_id(raw: &str) -> BookingResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| BookingError::Validation("Invalid hospital ID".to_string()))
}

/// Decides whether `principal` may list the appointments of `hospital_id`.
///
/// A mismatched hospital is reported as unauthenticated, the same as a
/// missing session.
pub fn authorize_listing(principal: Option<&Principal>, hospital_id: &str) -> BookingResult<i32> {
    let principal =
        principal.ok_or_else(|| BookingError::Authentication("Unauthorized".to_string()))?;

    let id = parse_hospital_id(hospital_id)?;

    if principal.hospital_id != id {
        return Err(BookingError::Authentication("Unauthorized".to_string()));
    }

    Ok(id)
}

/// Decides whether `principal` may delete `appointment_id` under `hospital_id`.
///
/// This only checks the session against the path. Whether the appointment
/// really belongs to the hospital is enforced by deleting on both ids.
pub fn authorize_removal(
    principal: Option<&Principal>,
    hospital_id: &str,
    appointment_id: &str,
) -> BookingResult<RemovalTarget> {
    let principal =
        principal.ok_or_else(|| BookingError::Authentication("Unauthorized".to_string()))?;

    if !principal.is_hospital(hospital_id) {
        return Err(BookingError::Authorization(
            "Forbidden - Hospital ID mismatch".to_string(),
        ));
    }

    let appointment_id = appointment_id.trim();
    if appointment_id.is_empty() {
        return Err(BookingError::Validation("Appointment ID is required".to_string()));
    }
    let appointment_id = appointment_id
        .parse()
        .map_err(|_| BookingError::Validation("Invalid appointment ID".to_string()))?;

    Ok(RemovalTarget {
        hospital_id: principal.hospital_id,
        appointment_id,
    })
}
