//! SQLite repository for users
//!
//! Each function issues a single statement against a borrowed connection
//! and knows nothing about connection lifetime or logging.

use crate::errors::{from_rusqlite, from_write, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use userdb_core::model::{NewUser, User};

const SELECT_USER: &str = "SELECT id, name, email FROM users";

fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

/// Stateless SQL for the `users` table
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a user and return it with the id SQLite assigned
    ///
    /// # Errors
    /// * `DuplicateEmail` - the email is already taken
    pub fn insert_user(conn: &Connection, new_user: NewUser) -> Result<User> {
        conn.execute(
            "INSERT INTO users (name, email) VALUES (?1, ?2)",
            rusqlite::params![new_user.name, new_user.email],
        )
        .map_err(|e| from_write(e, &new_user.email))?;

        Ok(new_user.with_id(conn.last_insert_rowid()))
    }

    pub fn get_user(conn: &Connection, user_id: i64) -> Result<Option<User>> {
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_USER),
            [user_id],
            map_user,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Overwrite both columns of an existing row
    ///
    /// Returns the number of rows changed (0 when the id is gone).
    ///
    /// # Errors
    /// * `DuplicateEmail` - another row already has `user.email`
    pub fn update_user(conn: &Connection, user: &User) -> Result<usize> {
        conn.execute(
            "UPDATE users SET name = ?1, email = ?2 WHERE id = ?3",
            rusqlite::params![user.name, user.email, user.id],
        )
        .map_err(|e| from_write(e, &user.email))
    }

    /// Returns the number of rows removed
    pub fn delete_user(conn: &Connection, user_id: i64) -> Result<usize> {
        conn.execute("DELETE FROM users WHERE id = ?1", [user_id])
            .map_err(from_rusqlite)
    }

    /// All users in id order (which is insertion order)
    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_USER))
            .map_err(from_rusqlite)?;

        let users = stmt
            .query_map([], map_user)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(users)
    }

    /// Returns the number of rows removed
    pub fn delete_all_users(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM users", []).map_err(from_rusqlite)
    }

    pub fn count_users(conn: &Connection) -> Result<usize> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(count as usize)
    }
}
