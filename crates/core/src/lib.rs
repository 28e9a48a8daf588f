//! Domain types and rules for the MediBook booking service.
//!
//! Nothing in this crate touches the network or the database: intake
//! validation and the hospital-scoped access checks are pure functions so the
//! API layer can call them with an explicit authentication context.

pub mod access;
pub mod errors;
pub mod models;
pub mod validation;
