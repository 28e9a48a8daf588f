use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        StatusCode,
    },
    response::IntoResponse,
    Json,
};
use medibook_core::models::hospital::Hospital;

use crate::{middleware::error_handling::AppError, ApiState};

const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Public hospital directory with doctors nested under each hospital.
///
/// Any origin may read it, so the permissive CORS headers are set here
/// rather than by the configurable layer guarding the session routes.
#[axum::debug_handler]
pub async fn list_hospitals(
    State(state): State<Arc<ApiState>>,
) -> Result<([(axum::http::HeaderName, &'static str); 2], Json<Vec<Hospital>>), AppError> {
    let hospitals = state.store.list_hospitals().await?;

    tracing::debug!("Serving {} hospitals", hospitals.len());
    Ok((
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
        ],
        Json(hospitals),
    ))
}

/// Answers pre-flight requests for the directory.
pub async fn hospitals_preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
