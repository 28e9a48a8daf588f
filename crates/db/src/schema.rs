use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create hospitals table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hospitals (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            address TEXT NOT NULL,
            consultation_fee VARCHAR(64) NOT NULL,
            rating VARCHAR(16) NOT NULL,
            experience VARCHAR(64) NULL,
            wait_time VARCHAR(64) NOT NULL,
            contact VARCHAR(64) NOT NULL,
            ambulance INTEGER NOT NULL DEFAULT 0,
            blood INTEGER NOT NULL DEFAULT 0,
            oxygen INTEGER NOT NULL DEFAULT 0,
            beds INTEGER NOT NULL DEFAULT 0,
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL,
            specialities TEXT[] NOT NULL DEFAULT '{}',
            about TEXT NULL,
            next_available TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            verified BOOLEAN NOT NULL DEFAULT FALSE,
            amenities TEXT[] NOT NULL DEFAULT '{}',
            email VARCHAR(255) NOT NULL UNIQUE,
            license_number VARCHAR(64) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create doctors table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctors (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            specialty VARCHAR(255) NOT NULL,
            experience VARCHAR(64) NOT NULL,
            hospital_id INTEGER NOT NULL REFERENCES hospitals(id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id SERIAL PRIMARY KEY,
            patient VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NOT NULL,
            symptoms TEXT NOT NULL,
            latitude DOUBLE PRECISION NOT NULL,
            longitude DOUBLE PRECISION NOT NULL,
            date DATE NOT NULL,
            time VARCHAR(64) NOT NULL,
            alert TEXT[] NOT NULL DEFAULT '{}',
            hospital_id INTEGER NOT NULL REFERENCES hospitals(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create sessions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token UUID PRIMARY KEY,
            hospital_id INTEGER NOT NULL REFERENCES hospitals(id) ON DELETE CASCADE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL,
            CONSTRAINT valid_session_window CHECK (expires_at > created_at)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Several statements in one batch need the simple query protocol
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_doctors_hospital_id ON doctors(hospital_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_hospital_id_date ON appointments(hospital_id, date);
        CREATE INDEX IF NOT EXISTS idx_sessions_hospital_id ON sessions(hospital_id);
        CREATE INDEX IF NOT EXISTS idx_sessions_expires_at ON sessions(expires_at);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
