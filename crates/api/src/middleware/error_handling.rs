//! # Error Handling Middleware
//!
//! Maps [`BookingError`] values to HTTP status codes and JSON bodies so every
//! handler reports failures the same way.
//!
//! Client errors carry their message (plus `details` for shape violations
//! and `code` for constraint violations). Server errors are logged in full
//! and answered with a generic message only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medibook_core::errors::BookingError;
use serde_json::{json, Value};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use medibook_api::middleware::error_handling::AppError;
/// use medibook_core::errors::BookingError;
///
/// async fn handler(hospital_id: i32) -> Result<Json<i32>, AppError> {
///     if hospital_id < 0 {
///         return Err(AppError(BookingError::Validation("Invalid hospital ID".to_string())));
///     }
///     Ok(Json(hospital_id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::InvalidPayload(_)
            | BookingError::MissingLocation
            | BookingError::InvalidDate(_)
            | BookingError::HospitalNotFound(_)
            | BookingError::Validation(_)
            | BookingError::ForeignKeyViolation
            | BookingError::Constraint { .. } => StatusCode::BAD_REQUEST,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::Authorization(_) => StatusCode::FORBIDDEN,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Database(_) | BookingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> Value {
        match &self.0 {
            BookingError::InvalidPayload(_) => json!({
                "error": self.0.to_string(),
                "details": self.0.details().unwrap_or_default(),
            }),
            BookingError::Constraint { code } => json!({
                "error": self.0.to_string(),
                "code": code,
            }),
            BookingError::Database(_) | BookingError::Internal(_) => {
                json!({ "error": "Internal server error" })
            }
            other => json!({ "error": other.to_string() }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self.0);
        }

        (status, Json(self.body())).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, BookingError>` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Store reports go through the domain classification, so a constraint
/// rejection still becomes a client error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::from(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
