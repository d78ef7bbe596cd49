//! Sample data for an empty database

use serde::Serialize;
use userdb_core::model::{NewUser, User};

/// The fixed sample users, in insertion order
pub const SAMPLE_USERS: [(&str, &str); 5] = [
    ("Alice Smith", "alice@example.com"),
    ("Bob Johnson", "bob@example.com"),
    ("Charlie Lee", "charlie@example.com"),
    ("Dana White", "dana@example.com"),
    ("Eve Black", "eve@example.com"),
];

pub fn sample_users() -> impl Iterator<Item = NewUser> {
    SAMPLE_USERS
        .iter()
        .map(|(name, email)| NewUser::new(*name, *email))
}

/// What `UserStore::seed_if_empty` did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// The table already had rows; nothing was written
    Skipped { existing_count: usize },
    /// The table was empty and the sample users were inserted
    Seeded { created: Vec<User> },
}

impl SeedOutcome {
    pub fn created_count(&self) -> usize {
        match self {
            SeedOutcome::Skipped { .. } => 0,
            SeedOutcome::Seeded { created } => created.len(),
        }
    }
}
