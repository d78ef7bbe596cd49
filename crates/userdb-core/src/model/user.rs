use serde::{Deserialize, Serialize};

use crate::errors::{Result, UserDbError};

/// A row of the `users` table
///
/// `id` is assigned by SQLite (AUTOINCREMENT) and never changes. `email` is
/// unique across all rows; `name` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Field values for a user that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach the id SQLite assigned on insert
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Partial update: `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserPatch {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// True when the patch names no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Reject a patch that would change nothing
    ///
    /// # Errors
    /// * `InvalidArgument` - neither `name` nor `email` supplied
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(UserDbError::no_update_fields());
        }
        Ok(())
    }

    /// Merge onto the current record, filling missing fields from it
    ///
    /// # Errors
    /// * `InvalidArgument` - neither `name` nor `email` supplied
    pub fn merge_onto(&self, current: &User) -> Result<User> {
        self.validate()?;
        Ok(User {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            email: self.email.clone().unwrap_or_else(|| current.email.clone()),
        })
    }
}
