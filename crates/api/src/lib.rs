//! # MediBook API
//!
//! The API crate provides the web server for the MediBook hospital booking
//! service: patient appointment intake, the public hospital directory, and
//! hospital-scoped appointment management behind a login session.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Authentication context and error mapping
//! - **Config**: Environment-driven application configuration
//!
//! Handlers reach the database only through the `BookingStore` trait held
//! in [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Authentication context and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use chrono::Duration;
use eyre::Result;
use medibook_db::store::BookingStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Read-only after startup; concurrent requests share it through an `Arc`.
pub struct ApiState {
    /// Persistence backend (PostgreSQL in production, a mock in tests)
    pub store: Arc<dyn BookingStore>,

    /// Lifetime of sessions created by the login endpoint
    pub session_ttl: Duration,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, session_ttl: Duration) -> Self {
        Self { store, session_ttl }
    }
}

/// Parses the configured origins into header values.
///
/// Values that are not valid headers are skipped with a warning, and so is
/// `*`: credentialed CORS needs explicit origins.
fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("Ignoring wildcard CORS origin; list explicit origins instead");
                return None;
            }
            match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            }
        })
        .collect()
}

/// Builds the CORS layer for the session-scoped routes.
fn session_cors(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(allowed_origins(origins))
        .allow_credentials(true)
}

/// Assembles the application router.
///
/// The hospital directory sets its own permissive CORS headers; the
/// configured origin list only applies to the remaining API routes.
pub fn build_router(state: Arc<ApiState>, cors_origins: Option<&[String]>) -> Router {
    let api = Router::new()
        // Patient intake
        .merge(routes::appointment::public_routes())
        // Hospital-scoped appointment management
        .merge(routes::appointment::hospital_routes())
        // Login and logout
        .merge(routes::session::routes());

    let api = match cors_origins {
        Some(origins) => api.layer(session_cors(origins)),
        None => api,
    };

    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Public hospital directory
        .merge(routes::hospital::routes())
        .merge(api)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Starts the API server with the provided configuration and store
///
/// Initializes logging, builds the router and serves until the listener
/// fails.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # async fn run() -> eyre::Result<()> {
/// use medibook_api::config::ApiConfig;
/// use medibook_db::{create_pool, store::PgStore};
///
/// let config = ApiConfig::from_env()?;
/// let pool = create_pool(&config.database_url, config.database_max_connections).await?;
/// medibook_api::start_server(config, Arc::new(PgStore::new(pool))).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(store, config.session_ttl));

    let app = build_router(state, config.cors_origins.as_deref());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
