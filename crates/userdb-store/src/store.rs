//! The storage handle
//!
//! `UserStore` is created once at process start. It holds only the database
//! location; every operation opens its own connection, runs its statement,
//! and drops the connection before returning. SQLite autocommits each
//! statement, so nothing is left pending between calls.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::Connection;
use userdb_core::model::{NewUser, User, UserPatch};
use userdb_core::{log_op_end, log_op_error, log_op_start, UserDbError};

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use crate::schema::ensure_schema;
use crate::seed::{sample_users, SeedOutcome};

/// Handle to the on-disk user table
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

/// Run `f`, bracketing it with start and end/end_error events
fn instrumented<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    let result = f();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => log_op_error!(op, e.clone(), duration_ms = elapsed),
    }
    result
}

impl UserStore {
    /// Open the store at `path`, creating the file and table if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        instrumented("open_store", || {
            db::ensure_parent_dir(&path)?;
            let conn = db::open(&path)?;
            ensure_schema(&conn)?;
            tracing::debug!(db_path = %path.display(), "user store ready");
            Ok(())
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire a connection for the duration of one operation
    fn connect(&self) -> Result<Connection> {
        db::open(&self.path)
    }

    /// Insert a new user
    ///
    /// # Errors
    /// * `DuplicateEmail` - `email` already belongs to a user
    /// * `Storage` - any other SQLite failure
    pub fn create(&self, name: &str, email: &str) -> Result<User> {
        instrumented("create_user", || {
            let conn = self.connect()?;
            SqliteRepo::insert_user(&conn, NewUser::new(name, email))
        })
    }

    /// Fetch one user by id
    ///
    /// # Errors
    /// * `UserNotFound` - no row has this id
    pub fn read(&self, user_id: i64) -> Result<User> {
        instrumented("read_user", || {
            let conn = self.connect()?;
            SqliteRepo::get_user(&conn, user_id)?
                .ok_or(UserDbError::UserNotFound { user_id })
        })
    }

    /// Change the name and/or email of a user
    ///
    /// Fields left `None` in `patch` keep their stored values.
    ///
    /// # Errors
    /// * `InvalidArgument` - `patch` names no field; nothing is read or written
    /// * `UserNotFound` - no row has this id
    /// * `DuplicateEmail` - the new email belongs to a different user
    pub fn update(&self, user_id: i64, patch: &UserPatch) -> Result<User> {
        instrumented("update_user", || {
            patch.validate()?;
            let conn = self.connect()?;
            let current = SqliteRepo::get_user(&conn, user_id)?
                .ok_or(UserDbError::UserNotFound { user_id })?;
            let updated = patch.merge_onto(&current)?;

            // The row can vanish between the read and the write.
            if SqliteRepo::update_user(&conn, &updated)? == 0 {
                return Err(UserDbError::UserNotFound { user_id });
            }
            Ok(updated)
        })
    }

    /// Remove one user; returns the number of rows removed (always 1)
    ///
    /// # Errors
    /// * `UserNotFound` - no row has this id
    pub fn delete(&self, user_id: i64) -> Result<usize> {
        instrumented("delete_user", || {
            let conn = self.connect()?;
            match SqliteRepo::delete_user(&conn, user_id)? {
                0 => Err(UserDbError::UserNotFound { user_id }),
                removed => Ok(removed),
            }
        })
    }

    /// All users, ascending by id
    pub fn list(&self) -> Result<Vec<User>> {
        instrumented("list_users", || {
            let conn = self.connect()?;
            SqliteRepo::list_users(&conn)
        })
    }

    /// Remove every user; returns how many were removed (0 if already empty)
    pub fn delete_all(&self) -> Result<usize> {
        instrumented("delete_all_users", || {
            let conn = self.connect()?;
            SqliteRepo::delete_all_users(&conn)
        })
    }

    /// Insert the sample users, but only into an empty table
    ///
    /// The emptiness check and the inserts share one transaction, so two
    /// processes seeding at once cannot both insert.
    pub fn seed_if_empty(&self) -> Result<SeedOutcome> {
        instrumented("populate_database", || {
            let mut conn = self.connect()?;
            let tx = conn
                .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)
                .map_err(from_rusqlite)?;

            let existing_count = SqliteRepo::count_users(&tx)?;
            if existing_count > 0 {
                return Ok(SeedOutcome::Skipped { existing_count });
            }

            let created = sample_users()
                .map(|new_user| SqliteRepo::insert_user(&tx, new_user))
                .collect::<Result<Vec<_>>>()?;
            tx.commit().map_err(from_rusqlite)?;

            Ok(SeedOutcome::Seeded { created })
        })
    }
}
