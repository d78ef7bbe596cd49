//! Schema bootstrap
//!
//! The table definition is shared with data files written by earlier
//! deployments, so column names, types and the UNIQUE constraint must not
//! drift. No version table is added.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

pub const USERS_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

/// Create the `users` table if it does not exist. Idempotent.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(USERS_TABLE_DDL, []).map_err(from_rusqlite)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn.prepare("PRAGMA table_info(users)").unwrap();
        stmt.query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_ensure_schema_creates_users_table() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert_eq!(column_names(&conn), vec!["id", "name", "email"]);
    }

    #[test]
    fn test_ensure_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (name, email) VALUES ('A', 'a@example.com')",
            [],
        )
        .unwrap();
        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Re-running must not drop existing rows");
    }
}
