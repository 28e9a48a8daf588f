//! # Authentication Module
//!
//! Hospital accounts sign in with an email and password. Passwords are
//! stored as Argon2 PHC strings; a successful login creates a session row
//! whose UUID token the client sends back as `Authorization: Bearer <token>`.
//!
//! Handlers never look the session up themselves. They take an
//! [`AuthContext`] argument, which axum fills in from the request headers,
//! and pass the principal it holds to the rules in `medibook_core::access`.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use eyre::{eyre, Result};
use medibook_core::{errors::BookingError, models::session::Principal};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Hashes a password using the Argon2 algorithm
///
/// A random salt is generated for each call and the result is returned in
/// PHC string format (algorithm, version, parameters, salt and hash).
///
/// # Example
///
/// ```rust
/// use medibook_api::middleware::auth::hash_password;
///
/// let hashed = hash_password("front-desk-password").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a plain text password against a stored PHC hash.
///
/// Returns `Ok(false)` for a wrong password and an error only when the
/// stored hash itself cannot be parsed.
pub fn verify_password(password_hash: &str, password: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| eyre!("Invalid password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Extracts the session token from an `Authorization: Bearer` header.
///
/// Missing headers, other schemes and tokens that are not UUIDs all yield
/// `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Uuid::parse_str(token.trim()).ok()
}

/// Authentication state of a single request.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    token: Option<Uuid>,
    principal: Option<Principal>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: Uuid, principal: Principal) -> Self {
        Self {
            token: Some(token),
            principal: Some(principal),
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// The live session token, if the request carried one.
    pub fn token(&self) -> Option<Uuid> {
        self.principal.as_ref().and(self.token)
    }

    pub fn require(&self) -> Result<&Principal, BookingError> {
        self.principal()
            .ok_or_else(|| BookingError::Authentication("Unauthorized".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(Self::anonymous());
        };

        match state.store.find_session(token).await? {
            Some(principal) => {
                tracing::debug!("Session resolved for hospital {}", principal.hospital_id);
                Ok(Self::authenticated(token, principal))
            }
            None => {
                tracing::debug!("Unknown or expired session token");
                Ok(Self::anonymous())
            }
        }
    }
}
