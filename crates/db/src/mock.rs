//! Test doubles for the persistence layer.

pub use crate::store::MockBookingStore;
