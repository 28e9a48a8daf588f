use std::collections::HashMap;

use crate::models::{DbDoctor, DbHospital, DbHospitalAccount};
use eyre::{Result, eyre};
use medibook_core::models::hospital::{Doctor, Hospital};
use sqlx::{Pool, Postgres};

pub async fn hospital_exists(pool: &Pool<Postgres>, id: i32) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM hospitals WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Hospital lookup: id={}, exists={}", id, exists);
    Ok(exists)
}

/// Every hospital with its doctors attached, ordered by hospital id.
pub async fn get_hospitals_with_doctors(pool: &Pool<Postgres>) -> Result<Vec<Hospital>> {
    let hospitals = sqlx::query_as::<_, DbHospital>(
        r#"
        SELECT id, name, address, consultation_fee, rating, experience, wait_time, contact,
               ambulance, blood, oxygen, beds, latitude, longitude, specialities, about,
               next_available, verified, amenities
        FROM hospitals
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let doctors = sqlx::query_as::<_, DbDoctor>(
        r#"
        SELECT id, name, specialty, experience, hospital_id
        FROM doctors
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut by_hospital: HashMap<i32, Vec<Doctor>> = HashMap::new();
    for doctor in doctors {
        by_hospital
            .entry(doctor.hospital_id)
            .or_default()
            .push(Doctor::from(doctor));
    }

    tracing::debug!("Loaded {} hospitals", hospitals.len());

    Ok(hospitals
        .into_iter()
        .map(|hospital| {
            let doctors = by_hospital.remove(&hospital.id).unwrap_or_default();
            hospital.into_hospital(doctors)
        })
        .collect())
}

pub async fn get_account_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<DbHospitalAccount>> {
    let account = sqlx::query_as::<_, DbHospitalAccount>(
        r#"
        SELECT id, email, license_number, password_hash
        FROM hospitals
        WHERE LOWER(email) = LOWER($1)
        "#,
    )
    .bind(email.trim())
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

pub async fn set_password_hash(pool: &Pool<Postgres>, id: i32, password_hash: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE hospitals
        SET password_hash = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(eyre!("Hospital {} not found", id));
    }

    Ok(())
}
