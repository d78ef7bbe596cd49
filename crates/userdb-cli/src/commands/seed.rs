//! Sample data command
//!
//! Usage: userdb seed

use userdb_core_types::RequestContext;
use userdb_engine::{apply_tool_call, ToolCall, ToolStatus};
use userdb_store::UserStore;

pub fn execute(store: &UserStore) -> Result<(), Box<dyn std::error::Error>> {
    let envelope = apply_tool_call(ToolCall::PopulateDatabase, store, &RequestContext::new());
    let message = envelope.message.clone().unwrap_or_default();

    match envelope.status {
        ToolStatus::Success | ToolStatus::Skipped => {
            println!("{}", message);
            Ok(())
        }
        ToolStatus::NotFound | ToolStatus::Error => Err(message.into()),
    }
}
