use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/login", post(handlers::session::login))
        .route("/api/auth/logout", post(handlers::session::logout))
}
