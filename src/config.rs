//! Configuration management
//!
//! Loads settings from an optional `config.toml` with `CREDLOCK_*`
//! environment overrides; anything unset falls back to built-in defaults.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::auth::Policy;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the flat-file account store
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Minimum username length in characters
    #[serde(default = "default_min_username_chars")]
    pub min_username_chars: usize,

    /// Minimum credential length in characters
    #[serde(default = "default_min_credential_chars")]
    pub min_credential_chars: usize,

    /// Failed login attempts before an account locks
    #[serde(default = "default_max_failed_attempts")]
    pub max_failed_attempts: u32,
}

fn default_store_path() -> String {
    "users.txt".to_string()
}

fn default_min_username_chars() -> usize {
    3
}

fn default_min_credential_chars() -> usize {
    6
}

fn default_max_failed_attempts() -> u32 {
    3
}

impl AppConfig {
    /// Load configuration from config.toml (if present) with environment
    /// overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CREDLOCK"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Extract the engine policy portion
    pub fn policy(&self) -> Policy {
        Policy {
            min_username_chars: self.min_username_chars,
            min_credential_chars: self.min_credential_chars,
            max_failed_attempts: self.max_failed_attempts,
        }
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.is_empty() {
            return Err(ConfigError::Message("store_path cannot be empty".into()));
        }

        if self.min_username_chars == 0 {
            return Err(ConfigError::Message(
                "min_username_chars must be greater than 0".into(),
            ));
        }

        if self.min_credential_chars == 0 {
            return Err(ConfigError::Message(
                "min_credential_chars must be greater than 0".into(),
            ));
        }

        if self.max_failed_attempts == 0 {
            return Err(ConfigError::Message(
                "max_failed_attempts must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
