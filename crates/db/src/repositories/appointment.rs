use crate::{models::DbAppointment, violation::classify};
use eyre::Result;
use medibook_core::models::appointment::NewAppointment;
use sqlx::{Pool, Postgres};

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Creating appointment: hospital_id={}, date={}, alerts={}",
        appointment.hospital_id,
        appointment.date,
        appointment.alert.len()
    );

    let created = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (patient, phone, symptoms, latitude, longitude, date, time, alert, hospital_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, patient, phone, symptoms, latitude, longitude, date, time, alert, hospital_id, created_at
        "#,
    )
    .bind(&appointment.patient)
    .bind(&appointment.phone)
    .bind(&appointment.symptoms)
    .bind(appointment.latitude)
    .bind(appointment.longitude)
    .bind(appointment.date)
    .bind(&appointment.time)
    .bind(&appointment.alert)
    .bind(appointment.hospital_id)
    .fetch_one(pool)
    .await
    .map_err(classify)?;

    tracing::debug!("Appointment created successfully: id={}", created.id);
    Ok(created)
}

pub async fn get_appointments_by_hospital_id(
    pool: &Pool<Postgres>,
    hospital_id: i32,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, patient, phone, symptoms, latitude, longitude, date, time, alert, hospital_id, created_at
        FROM appointments
        WHERE hospital_id = $1
        ORDER BY date ASC, id ASC
        "#,
    )
    .bind(hospital_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Deletes an appointment only when it belongs to `hospital_id`.
/// Returns `None` when no row matches both ids.
pub async fn delete_appointment_for_hospital(
    pool: &Pool<Postgres>,
    appointment_id: i32,
    hospital_id: i32,
) -> Result<Option<DbAppointment>> {
    let deleted = sqlx::query_as::<_, DbAppointment>(
        r#"
        DELETE FROM appointments
        WHERE id = $1 AND hospital_id = $2
        RETURNING id, patient, phone, symptoms, latitude, longitude, date, time, alert, hospital_id, created_at
        "#,
    )
    .bind(appointment_id)
    .bind(hospital_id)
    .fetch_optional(pool)
    .await
    .map_err(classify)?;

    match &deleted {
        Some(row) => tracing::debug!("Appointment deleted: id={}, hospital_id={}", row.id, hospital_id),
        None => tracing::debug!(
            "No appointment to delete: id={}, hospital_id={}",
            appointment_id,
            hospital_id
        ),
    }

    Ok(deleted)
}
