//! Process configuration
//!
//! Read from the environment (after `.env` has been loaded). The model API
//! key is required even though this process never calls the model itself:
//! without it the agent runtime cannot run, so we refuse to start.

use std::path::PathBuf;

use userdb_core::logging_facility::Profile;
use userdb_core::{Result, UserDbError};
use userdb_core_types::Sensitive;
use userdb_engine::DEFAULT_MODEL;

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_DB_PATH: &str = "USERDB_DB_PATH";
pub const ENV_LOG_FORMAT: &str = "USERDB_LOG_FORMAT";
pub const ENV_MODEL: &str = "USERDB_MODEL";

pub const DEFAULT_DB_PATH: &str = "users.db";

#[derive(Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub api_key: Sensitive<String>,
    pub log_profile: Profile,
    pub model: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Load from process environment variables
    ///
    /// # Errors
    /// * `MissingCredential` - `GOOGLE_API_KEY` unset or blank
    /// * `InvalidConfig` - `USERDB_LOG_FORMAT` not a known format
    pub fn from_env(db_override: Option<PathBuf>) -> Result<Self> {
        Self::from_lookup(db_override, |key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup(
        db_override: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .map(Sensitive::new)
            .filter(|key| !key.is_blank())
            .ok_or_else(|| UserDbError::MissingCredential {
                var: ENV_API_KEY.to_string(),
            })?;

        let db_path = db_override
            .or_else(|| non_blank(lookup(ENV_DB_PATH)).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let log_profile = match non_blank(lookup(ENV_LOG_FORMAT)) {
            Some(format) => format
                .parse::<Profile>()
                .map_err(|reason| UserDbError::InvalidConfig { reason })?,
            None => Profile::Development,
        };

        let model = non_blank(lookup(ENV_MODEL)).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            db_path,
            api_key,
            log_profile,
            model,
        })
    }
}
