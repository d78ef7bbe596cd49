//! Agent manifest command
//!
//! Usage: userdb manifest

use userdb_engine::agent_manifest;

use crate::config::AppConfig;

pub fn execute(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = agent_manifest(config.model.clone());
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
