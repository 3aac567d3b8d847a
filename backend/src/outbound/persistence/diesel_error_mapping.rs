//! Classification of Diesel failures shared by every repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Coarse failure category that repositories map into their port errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped or could not be used.
    Connection(String),
    /// A unique, foreign key, or check constraint rejected the statement.
    Constraint(String),
    /// Any other execution failure.
    Query(String),
}

/// Log the raw error at debug level and classify it.
///
/// Messages are kept generic so SQL details do not reach clients.
pub(crate) fn classify_diesel_error(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error".to_owned())
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation,
            info,
        ) => DieselFailure::Constraint(
            info.constraint_name()
                .map_or_else(|| "constraint violated".to_owned(), |name| format!("constraint {name} violated")),
        ),
        DieselError::NotFound => DieselFailure::Query("record not found".to_owned()),
        _ => DieselFailure::Query("database error".to_owned()),
    }
}
