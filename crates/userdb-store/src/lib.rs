//! userdb store - SQLite persistence for the `users` table
//!
//! Provides:
//! - Connection helpers and schema bootstrap (`CREATE TABLE IF NOT EXISTS`)
//! - `SqliteRepo`: one SQL statement per function, on a borrowed connection
//! - `UserStore`: the storage handle; acquires a fresh connection per call
//! - Idempotent seeding with the fixed sample users

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;
pub mod seed;
pub mod store;

pub use errors::Result;
pub use seed::{SeedOutcome, SAMPLE_USERS};
pub use store::UserStore;
