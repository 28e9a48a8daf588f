use thiserror::Error;

use crate::validation::FieldViolation;

/// A write rejected by one of the store's integrity constraints.
///
/// The db crate wraps these inside an `eyre::Report` so callers that only
/// propagate errors keep working, while the API layer can still recover the
/// classification by downcasting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("foreign key violation on {constraint}")]
    ForeignKey { constraint: String },

    #[error("constraint violation (SQLSTATE {code})")]
    Other { code: String },
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid request data")]
    InvalidPayload(Vec<FieldViolation>),

    #[error("Location data missing (latitude and longitude are required).")]
    MissingLocation,

    #[error("Invalid date format")]
    InvalidDate(String),

    #[error("Hospital not found")]
    HospitalNotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid hospital ID. Hospital not found.")]
    ForeignKeyViolation,

    #[error("Database error")]
    Constraint { code: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// Details list for shape failures, formatted as `field (expected type)`.
    pub fn details(&self) -> Option<Vec<String>> {
        match self {
            BookingError::InvalidPayload(violations) => {
                Some(violations.iter().map(ToString::to_string).collect())
            }
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, BookingError::Database(_) | BookingError::Internal(_))
    }
}

/// Store failures carrying a [`ConstraintViolation`] become client errors,
/// everything else stays a database failure.
impl From<eyre::Report> for BookingError {
    fn from(report: eyre::Report) -> Self {
        match report.downcast_ref::<ConstraintViolation>() {
            Some(ConstraintViolation::ForeignKey { .. }) => BookingError::ForeignKeyViolation,
            Some(ConstraintViolation::Other { code }) => BookingError::Constraint { code: code.clone() },
            None => BookingError::Database(report),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
