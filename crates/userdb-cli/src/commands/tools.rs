//! Tool catalog command
//!
//! Usage: userdb tools

use userdb_engine::tool_catalog;

pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&tool_catalog())?);
    Ok(())
}
