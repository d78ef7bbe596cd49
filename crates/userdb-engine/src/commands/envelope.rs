//! Result envelopes handed back to the agent runtime
//!
//! Every tool call produces exactly one envelope, success or not. The
//! `status` string and the payload keys (`user`, `updated_user`, `users`,
//! `deleted_count`, ...) are what the runtime's prompt expects to read.

use serde::Serialize;
use serde_json::{json, Map, Value};
use userdb_core::errors::{ExError, ExErrorKind, Result, UserDbError};

use crate::commands::tool_call::ToolName;

/// Outcome tag carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToolStatus {
    Success,
    #[serde(rename = "Not Found")]
    NotFound,
    Skipped,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEnvelope {
    pub status: ToolStatus,
    /// Stable error code; present on `Error` envelopes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ToolEnvelope {
    pub fn new(status: ToolStatus) -> Self {
        Self {
            status,
            code: None,
            message: None,
            payload: Map::new(),
        }
    }

    pub fn success() -> Self {
        Self::new(ToolStatus::Success)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a payload entry
    ///
    /// # Errors
    /// * `Serialization` - `value` has no JSON representation
    pub fn with_field(mut self, key: &str, value: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        self.payload.insert(key.to_string(), value);
        Ok(self)
    }

    /// Render a failed call
    ///
    /// `NotFound` gets its own status and a tool-specific sentence, with no
    /// code. Every other kind is reported as `Error` with its code and the
    /// error's message.
    pub fn from_error(tool: Option<ToolName>, err: &ExError) -> Self {
        let (status, code, message) = match (err.kind(), tool, err.user_id()) {
            (ExErrorKind::NotFound, Some(tool), Some(user_id)) => {
                (ToolStatus::NotFound, None, not_found_message(tool, user_id))
            }
            (ExErrorKind::NotFound, _, _) => {
                (ToolStatus::NotFound, None, err.message().to_string())
            }
            _ => (
                ToolStatus::Error,
                Some(err.code()),
                err.message().to_string(),
            ),
        };

        Self {
            status,
            code,
            message: Some(message),
            payload: Map::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            let err = ExError::from(UserDbError::from(e));
            json!({"status": "Error", "code": err.code(), "message": err.message()})
        })
    }

    /// Serialize to one line of JSON
    pub fn to_json_line(&self) -> String {
        self.to_value().to_string()
    }
}

fn not_found_message(tool: ToolName, user_id: i64) -> String {
    match tool {
        ToolName::UpdateUser => {
            format!("User with ID {} not found, so nothing was updated.", user_id)
        }
        ToolName::DeleteUser => {
            format!("User with ID {} not found, so nothing was deleted.", user_id)
        }
        _ => format!("User with ID {} was not found.", user_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use userdb_core::User;

    #[test]
    fn test_success_envelope_shape() {
        let env = ToolEnvelope::success()
            .with_field("user", User::new(1, "Alice Smith", "alice@example.com"))
            .unwrap();
        assert_eq!(
            env.to_value(),
            json!({
                "status": "Success",
                "user": {"id": 1, "name": "Alice Smith", "email": "alice@example.com"}
            })
        );
    }

    #[test]
    fn test_not_found_status_string() {
        let err: ExError = UserDbError::UserNotFound { user_id: 4 }.into();
        let env = ToolEnvelope::from_error(Some(ToolName::DeleteUser), &err);
        assert_eq!(
            env.to_value(),
            json!({
                "status": "Not Found",
                "message": "User with ID 4 not found, so nothing was deleted."
            })
        );
    }

    #[test]
    fn test_unserializable_field_is_serialization_error() {
        let mut by_pair = HashMap::new();
        by_pair.insert((1, 2), "non-string key");

        let err = ToolEnvelope::success()
            .with_field("bad", by_pair)
            .unwrap_err();
        assert!(matches!(err, UserDbError::Serialization { .. }));

        let env = ToolEnvelope::from_error(None, &ExError::from(err));
        assert_eq!(env.status, ToolStatus::Error);
        assert_eq!(env.code, Some("ERR_SERIALIZATION"));
    }

    #[test]
    fn test_other_errors_use_error_status() {
        let err: ExError = UserDbError::DuplicateEmail {
            email: "a@x.com".to_string(),
        }
        .into();
        let env = ToolEnvelope::from_error(Some(ToolName::CreateUser), &err);
        assert_eq!(env.status, ToolStatus::Error);
        assert_eq!(env.code, Some("ERR_DUPLICATE_EMAIL"));
        assert_eq!(
            env.message.as_deref(),
            Some("A user with the email 'a@x.com' already exists.")
        );
        assert!(!env.is_success());
    }

    #[test]
    fn test_json_line_has_no_newline() {
        let env = ToolEnvelope::success().with_message("multi\nline");
        assert!(!env.to_json_line().contains('\n'));
    }
}
