//! Single tool invocation
//!
//! Usage: userdb call <TOOL> [--args <JSON>]
//!
//! The envelope is printed as one JSON line whatever the outcome; only an
//! unparsable `--args` value is a command failure.

use clap::Args;
use serde_json::Value;
use userdb_core_types::RequestContext;
use userdb_engine::invoke_tool;
use userdb_store::UserStore;

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name, e.g. create_user
    pub tool: String,

    /// Tool arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub args: String,
}

pub fn execute(args: CallArgs, store: &UserStore) -> Result<(), Box<dyn std::error::Error>> {
    let tool_args: Value = serde_json::from_str(&args.args)
        .map_err(|e| format!("--args is not valid JSON: {}", e))?;

    let envelope = invoke_tool(store, &args.tool, tool_args, &RequestContext::new());
    println!("{}", envelope.to_json_line());
    Ok(())
}
