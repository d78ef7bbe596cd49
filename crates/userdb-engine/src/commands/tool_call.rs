//! Typed tool invocations
//!
//! The runtime names a tool and hands over a JSON object of arguments.
//! `ToolCall::parse` turns that pair into one typed variant, or into an
//! `UnknownTool`/`InvalidToolArguments` error that the dispatcher reports
//! as an envelope.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use userdb_core::errors::{Result, UserDbError};
use userdb_core::UserPatch;

/// Every tool the agent can call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    CreateUser,
    ReadUser,
    UpdateUser,
    DeleteUser,
    ListUsers,
    DeleteAllUsers,
    PopulateDatabase,
}

impl ToolName {
    /// Catalog order
    pub const ALL: [ToolName; 7] = [
        ToolName::CreateUser,
        ToolName::ReadUser,
        ToolName::UpdateUser,
        ToolName::DeleteUser,
        ToolName::ListUsers,
        ToolName::DeleteAllUsers,
        ToolName::PopulateDatabase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::CreateUser => "create_user",
            ToolName::ReadUser => "read_user",
            ToolName::UpdateUser => "update_user",
            ToolName::DeleteUser => "delete_user",
            ToolName::ListUsers => "list_users",
            ToolName::DeleteAllUsers => "delete_all_users",
            ToolName::PopulateDatabase => "populate_database",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = UserDbError;

    fn from_str(s: &str) -> Result<Self> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| UserDbError::UnknownTool {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateUserArgs {
    name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserIdArgs {
    user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UpdateUserArgs {
    user_id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

/// A parsed tool invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    CreateUser { name: String, email: String },
    ReadUser { user_id: i64 },
    UpdateUser { user_id: i64, patch: UserPatch },
    DeleteUser { user_id: i64 },
    ListUsers,
    DeleteAllUsers,
    PopulateDatabase,
}

fn parse_args<T: DeserializeOwned>(tool: ToolName, args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| UserDbError::InvalidToolArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

impl ToolCall {
    /// Build a call from a tool name and its JSON arguments
    ///
    /// A `null` argument value is treated as `{}`.
    ///
    /// # Errors
    /// * `UnknownTool` - `name` is not in the catalog
    /// * `InvalidToolArguments` - arguments missing, mistyped or unexpected
    pub fn parse(name: &str, args: Value) -> Result<Self> {
        let tool: ToolName = name.parse()?;
        let args = if args.is_null() {
            Value::Object(Default::default())
        } else {
            args
        };

        let call = match tool {
            ToolName::CreateUser => {
                let a: CreateUserArgs = parse_args(tool, args)?;
                ToolCall::CreateUser {
                    name: a.name,
                    email: a.email,
                }
            }
            ToolName::ReadUser => ToolCall::ReadUser {
                user_id: parse_args::<UserIdArgs>(tool, args)?.user_id,
            },
            ToolName::UpdateUser => {
                let a: UpdateUserArgs = parse_args(tool, args)?;
                ToolCall::UpdateUser {
                    user_id: a.user_id,
                    patch: UserPatch::new(a.name, a.email),
                }
            }
            ToolName::DeleteUser => ToolCall::DeleteUser {
                user_id: parse_args::<UserIdArgs>(tool, args)?.user_id,
            },
            ToolName::ListUsers => {
                parse_args::<NoArgs>(tool, args)?;
                ToolCall::ListUsers
            }
            ToolName::DeleteAllUsers => {
                parse_args::<NoArgs>(tool, args)?;
                ToolCall::DeleteAllUsers
            }
            ToolName::PopulateDatabase => {
                parse_args::<NoArgs>(tool, args)?;
                ToolCall::PopulateDatabase
            }
        };
        Ok(call)
    }

    pub fn tool(&self) -> ToolName {
        match self {
            ToolCall::CreateUser { .. } => ToolName::CreateUser,
            ToolCall::ReadUser { .. } => ToolName::ReadUser,
            ToolCall::UpdateUser { .. } => ToolName::UpdateUser,
            ToolCall::DeleteUser { .. } => ToolName::DeleteUser,
            ToolCall::ListUsers => ToolName::ListUsers,
            ToolCall::DeleteAllUsers => ToolName::DeleteAllUsers,
            ToolCall::PopulateDatabase => ToolName::PopulateDatabase,
        }
    }
}

/// One request as it arrives on the wire
///
/// ```json
/// {"tool": "read_user", "args": {"user_id": 1}, "request_id": "optional", "trace_id": "optional"}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolInvocation {
    pub tool: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
}
