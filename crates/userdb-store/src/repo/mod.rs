//! Row-level access to the `users` table

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
