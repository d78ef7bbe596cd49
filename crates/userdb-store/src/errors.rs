//! Error helpers for the store
//!
//! Maps `rusqlite` failures onto the domain taxonomy in `userdb_core::errors`.

use rusqlite::ffi;
use userdb_core::errors::UserDbError;

/// Result type alias using UserDbError
pub type Result<T> = std::result::Result<T, UserDbError>;

/// Any SQLite failure that has no more specific meaning
pub fn from_rusqlite(err: rusqlite::Error) -> UserDbError {
    UserDbError::Storage {
        message: err.to_string(),
    }
}

/// Classify a failed INSERT/UPDATE that wrote `email`
///
/// `users.email` carries the table's only UNIQUE constraint, so a unique
/// violation always means the email is taken.
pub fn from_write(err: rusqlite::Error, email: &str) -> UserDbError {
    if is_unique_violation(&err) {
        UserDbError::DuplicateEmail {
            email: email.to_string(),
        }
    } else {
        from_rusqlite(err)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Filesystem failure while preparing the database location
pub fn io_error(operation: &str, err: std::io::Error) -> UserDbError {
    UserDbError::Storage {
        message: format!("{}: {}", operation, err),
    }
}
