use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/hospital",
        get(handlers::hospital::list_hospitals).options(handlers::hospital::hospitals_preflight),
    )
}
