//! Tool descriptions and the agent manifest
//!
//! The agent runtime chooses tools from their natural-language description
//! and fills arguments from the JSON Schema in `parameters`.

use serde::Serialize;
use serde_json::{json, Value};

use crate::commands::tool_call::ToolName;

pub const AGENT_NAME: &str = "db_agent";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub const AGENT_INSTRUCTION: &str = "\
You are a database management assistant.
You can perform CRUD operations (Create, Read, Update, Delete) on a user database.
When a user asks to perform an action, call the appropriate tool.
When you get the result from the tool, present it to the user in a clear and friendly manner.

Available operations:
- Create User: Add a new user with name and email
- Read User: Retrieve a specific user by their ID
- Update User: Modify an existing user's name and/or email
- Delete User: Remove a user from the database
- List Users: Show all users in the database
- Delete All Users: Remove all users from the database (WARNING: Cannot be undone)
- Populate Database: Add sample users to an empty database";

/// One entry of the tool catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

impl ToolSpec {
    pub fn for_tool(tool: ToolName) -> Self {
        Self {
            name: tool.as_str(),
            description: description(tool),
            parameters: parameters(tool),
        }
    }
}

fn description(tool: ToolName) -> &'static str {
    match tool {
        ToolName::CreateUser => {
            "Creates a new user in the database. Use this when asked to add or create a new user."
        }
        ToolName::ReadUser => {
            "Retrieves a single user's details using their unique ID. Use this when asked to find or get a specific user."
        }
        ToolName::UpdateUser => {
            "Updates the name and/or email for an existing user based on their ID. Use this when asked to change or update a user's details. You can update just the name, just the email, or both."
        }
        ToolName::DeleteUser => {
            "Deletes a user from the database using their unique ID. Use this when asked to delete or remove a user."
        }
        ToolName::ListUsers => {
            "Retrieves a list of all users in the database. Use this when asked to list, show, or get all users."
        }
        ToolName::DeleteAllUsers => {
            "Deletes all users from the database. Use this when asked to clear or delete all users. WARNING: This operation cannot be undone."
        }
        ToolName::PopulateDatabase => {
            "Populates the database with sample users if it's empty. Use this to add initial test data."
        }
    }
}

fn user_id_property() -> Value {
    json!({
        "type": "integer",
        "description": "The unique ID of the user."
    })
}

fn no_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

fn parameters(tool: ToolName) -> Value {
    match tool {
        ToolName::CreateUser => json!({
            "type": "object",
            "properties": {
                "name": {"type": "string", "description": "The full name of the user."},
                "email": {"type": "string", "description": "The unique email address for the user."}
            },
            "required": ["name", "email"],
            "additionalProperties": false
        }),
        ToolName::ReadUser | ToolName::DeleteUser => json!({
            "type": "object",
            "properties": {"user_id": user_id_property()},
            "required": ["user_id"],
            "additionalProperties": false
        }),
        ToolName::UpdateUser => json!({
            "type": "object",
            "properties": {
                "user_id": user_id_property(),
                "name": {
                    "type": "string",
                    "description": "The new name for the user (optional - only updated if provided)."
                },
                "email": {
                    "type": "string",
                    "description": "The new email address for the user (optional - only updated if provided)."
                }
            },
            "required": ["user_id"],
            "additionalProperties": false
        }),
        ToolName::ListUsers | ToolName::DeleteAllUsers | ToolName::PopulateDatabase => {
            no_parameters()
        }
    }
}

/// All tools, in a stable order
pub fn tool_catalog() -> Vec<ToolSpec> {
    ToolName::ALL.into_iter().map(ToolSpec::for_tool).collect()
}

/// The agent definition handed to the runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentManifest {
    pub name: &'static str,
    pub model: String,
    pub instruction: &'static str,
    pub tools: Vec<ToolSpec>,
}

pub fn agent_manifest(model: impl Into<String>) -> AgentManifest {
    AgentManifest {
        name: AGENT_NAME,
        model: model.into(),
        instruction: AGENT_INSTRUCTION,
        tools: tool_catalog(),
    }
}
