//! userdb engine - tool-binding layer
//!
//! Describes each store operation as a named, schema-described tool and
//! adapts store results into the JSON envelopes the agent runtime presents.
//! No business logic lives here.

pub mod commands;

pub use commands::catalog::{
    agent_manifest, tool_catalog, AgentManifest, ToolSpec, AGENT_NAME, DEFAULT_MODEL,
};
pub use commands::engine_command::{
    apply_tool_call, invoke, invoke_line, invoke_tool, reject_input,
};
pub use commands::envelope::{ToolEnvelope, ToolStatus};
pub use commands::tool_call::{ToolCall, ToolInvocation, ToolName};
