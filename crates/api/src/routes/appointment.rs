use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

/// Patient intake. Public.
pub fn public_routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/appointments",
        post(handlers::appointment::create_appointment),
    )
}

/// Hospital-scoped management. Requires a session.
pub fn hospital_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/hospital/:hospital_id/appointments",
            get(handlers::appointment::list_hospital_appointments),
        )
        .route(
            "/api/hospital/:hospital_id/appointments/:appointment_id",
            delete(handlers::appointment::delete_hospital_appointment),
        )
}
