use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::Utc;
use medibook_core::{
    errors::BookingError,
    models::session::{LoginRequest, LoginResponse},
};
use tracing::info;

use crate::{
    middleware::{
        auth::{verify_password, AuthContext},
        error_handling::AppError,
    },
    ApiState,
};

fn invalid_credentials() -> AppError {
    AppError(BookingError::Authentication(
        "Invalid email or password".to_string(),
    ))
}

/// Signs a hospital account in and opens a session.
///
/// Unknown emails, accounts without a password and wrong passwords all get
/// the same 401. A body that is not a login request is a 400.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<Json<LoginResponse>, AppError> {
    let payload: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        BookingError::Validation(format!("Request body must be valid JSON: {}", e))
    })?;

    let credentials = state
        .store
        .find_credentials(payload.email.trim().to_string())
        .await?
        .ok_or_else(invalid_credentials)?;

    let Some(password_hash) = credentials.password_hash.as_deref() else {
        return Err(invalid_credentials());
    };

    let is_valid = verify_password(password_hash, &payload.password).map_err(BookingError::Database)?;
    if !is_valid {
        return Err(invalid_credentials());
    }

    let expires_at = Utc::now() + state.session_ttl;
    let session = state
        .store
        .create_session(credentials.hospital_id, expires_at)
        .await?;

    info!("Hospital {} signed in", session.hospital_id);
    Ok(Json(LoginResponse::from(session)))
}

/// Ends the session the request was made with.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    auth: AuthContext,
) -> Result<StatusCode, AppError> {
    let principal = auth.require()?;
    let Some(token) = auth.token() else {
        return Err(AppError(BookingError::Authentication("Unauthorized".to_string())));
    };

    state.store.end_session(token).await?;

    info!("Hospital {} signed out", principal.hospital_id);
    Ok(StatusCode::NO_CONTENT)
}
