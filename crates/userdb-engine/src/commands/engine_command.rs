//! Tool dispatch
//!
//! `apply_tool_call` is the single entry point from a typed call to a store
//! operation. It never returns an error: every outcome, including bad ids and
//! duplicate emails, comes back as a `ToolEnvelope` the runtime can present.

use std::time::Instant;

use serde_json::Value;
use userdb_core::errors::{ExError, ExErrorKind, Result};
use userdb_core::{log_op_end, log_op_error, log_op_start};
use userdb_core_types::{RequestContext, RequestId, TraceId};
use userdb_store::{SeedOutcome, UserStore};

use crate::commands::envelope::{ToolEnvelope, ToolStatus};
use crate::commands::tool_call::{ToolCall, ToolInvocation, ToolName};

const OP: &str = "tool_call";

/// Run one parsed call against the store
pub fn apply_tool_call(call: ToolCall, store: &UserStore, ctx: &RequestContext) -> ToolEnvelope {
    let tool = call.tool();
    log_op_start!(
        OP,
        tool = tool.as_str(),
        request_id = ctx.request_id.as_str(),
        trace_id = ctx.trace_str(),
    );
    let start = Instant::now();

    let result = dispatch(call, store);

    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(envelope) => {
            log_op_end!(
                OP,
                duration_ms = elapsed,
                tool = tool.as_str(),
                request_id = ctx.request_id.as_str(),
                status = ?envelope.status,
            );
            envelope
        }
        Err(err) => {
            let ex = ExError::from(err).with_op(tool.as_str());
            log_op_error!(
                OP,
                ex.clone(),
                duration_ms = elapsed,
                tool = tool.as_str(),
                request_id = ctx.request_id.as_str(),
            );
            ToolEnvelope::from_error(Some(tool), &ex)
        }
    }
}

fn dispatch(call: ToolCall, store: &UserStore) -> Result<ToolEnvelope> {
    let envelope = match call {
        ToolCall::CreateUser { name, email } => {
            let user = store.create(&name, &email)?;
            ToolEnvelope::success().with_field("user", user)?
        }
        ToolCall::ReadUser { user_id } => {
            let user = store.read(user_id)?;
            ToolEnvelope::success().with_field("user", user)?
        }
        ToolCall::UpdateUser { user_id, patch } => {
            let user = store.update(user_id, &patch)?;
            ToolEnvelope::success().with_field("updated_user", user)?
        }
        ToolCall::DeleteUser { user_id } => {
            store.delete(user_id)?;
            ToolEnvelope::success()
                .with_message(format!("User with ID {} was deleted successfully.", user_id))
        }
        ToolCall::ListUsers => {
            let users = store.list()?;
            ToolEnvelope::success()
                .with_field("count", users.len())?
                .with_field("users", users)?
        }
        ToolCall::DeleteAllUsers => {
            let deleted = store.delete_all()?;
            ToolEnvelope::success()
                .with_message(format!(
                    "All {} users have been deleted from the database.",
                    deleted
                ))
                .with_field("deleted_count", deleted)?
        }
        ToolCall::PopulateDatabase => match store.seed_if_empty()? {
            SeedOutcome::Skipped { existing_count } => ToolEnvelope::new(ToolStatus::Skipped)
                .with_message(format!(
                    "Database already contains {} users. No sample data added.",
                    existing_count
                ))
                .with_field("existing_count", existing_count)?,
            SeedOutcome::Seeded { created } => ToolEnvelope::success()
                .with_message(format!(
                    "Database populated with {} sample users.",
                    created.len()
                ))
                .with_field("created_count", created.len())?
                .with_field("created_users", created)?,
        },
    };
    Ok(envelope)
}

/// Invoke a tool by name with raw JSON arguments
///
/// Unknown names and malformed arguments still produce exactly one start
/// and one end_error event, and an `Error` envelope.
pub fn invoke_tool(
    store: &UserStore,
    name: &str,
    args: Value,
    ctx: &RequestContext,
) -> ToolEnvelope {
    match ToolCall::parse(name, args) {
        Ok(call) => apply_tool_call(call, store, ctx),
        Err(err) => {
            let ex = ExError::from(err).with_op(name);
            reject(name, ex, ctx)
        }
    }
}

/// Invoke a request decoded from the wire
pub fn invoke(store: &UserStore, invocation: ToolInvocation) -> ToolEnvelope {
    let mut ctx = match invocation.request_id {
        Some(id) => RequestContext::with_request_id(RequestId::from_string(id)),
        None => RequestContext::new(),
    };
    if let Some(trace_id) = invocation.trace_id {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }
    invoke_tool(store, &invocation.tool, invocation.args, &ctx)
}

/// Decode one line of line-delimited JSON and invoke it
///
/// A line that is not a valid request object yields an `ERR_INVALID_INPUT`
/// envelope.
pub fn invoke_line(store: &UserStore, line: &str) -> ToolEnvelope {
    match serde_json::from_str::<ToolInvocation>(line) {
        Ok(invocation) => invoke(store, invocation),
        Err(e) => reject_input(format!("Malformed request: {}", e)),
    }
}

/// Answer a request that could not be decoded at all
pub fn reject_input(message: impl Into<String>) -> ToolEnvelope {
    let ex = ExError::new(ExErrorKind::InvalidInput).with_message(message);
    reject("<malformed>", ex, &RequestContext::new())
}

fn reject(tool: &str, ex: ExError, ctx: &RequestContext) -> ToolEnvelope {
    log_op_start!(OP, tool = tool, request_id = ctx.request_id.as_str());
    log_op_error!(
        OP,
        ex.clone(),
        duration_ms = 0u64,
        tool = tool,
        request_id = ctx.request_id.as_str(),
    );
    ToolEnvelope::from_error(tool.parse::<ToolName>().ok(), &ex)
}
