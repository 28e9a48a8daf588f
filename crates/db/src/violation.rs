use eyre::Report;
use medibook_core::errors::ConstraintViolation;

/// SQLSTATE class of integrity constraint violations.
const INTEGRITY_CLASS: &str = "23";

/// Converts a failed write into a report, tagging integrity-constraint
/// rejections with a [`ConstraintViolation`].
///
/// Only SQLSTATE class `23` counts as a rejection. Every other server error
/// (missing relation, deadlock, cancelled statement) and every connection or
/// decoding failure passes through unchanged.
pub fn classify(err: sqlx::Error) -> Report {
    let violation = match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            Some(ConstraintViolation::ForeignKey {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            })
        }
        sqlx::Error::Database(db_err) => db_err
            .code()
            .filter(|code| code.starts_with(INTEGRITY_CLASS))
            .map(|code| ConstraintViolation::Other {
                code: code.into_owned(),
            }),
        _ => None,
    };

    match violation {
        Some(violation) => {
            tracing::debug!("Store rejected write: {} ({})", violation, err);
            Report::new(violation)
        }
        None => Report::new(err),
    }
}
