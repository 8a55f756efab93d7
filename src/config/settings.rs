//! Application settings management
//!
//! This module defines the settings structure and provides methods for
//! loading them from the compiled defaults, a TOML file and environment
//! variables, in increasing order of precedence.

use std::path::Path;

use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};

use super::environment::{self, Environment};
use crate::utils::errors::Result;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "coffeeshop";

/// Prefix of environment variable overrides, e.g. `COFFEESHOP_ENVIRONMENT__API_BASE_URL`
pub const ENV_PREFIX: &str = "COFFEESHOP";

/// Main application settings structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub environment: Environment,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for daily-rolling log files; console only when unset
    #[serde(default)]
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from `coffeeshop.toml` (if present) and environment variables
    pub fn new() -> Result<Self> {
        let settings = defaults()?
            .add_source(config::File::with_name(DEFAULT_SETTINGS_FILE).required(false))
            .add_source(env_overrides())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load settings from an explicit file, which must exist
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = defaults()?
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(env_overrides())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    /// Render the settings as a TOML document suitable for `coffeeshop.toml`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::utils::errors::CoffeeShopError::Config(e.to_string()))
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let env = environment::get();
    let logging = LoggingConfig::default();

    let builder = config::Config::builder()
        .set_default("environment.production_mode", env.production_mode)?
        .set_default("environment.api_base_url", &*env.api_base_url)?
        .set_default("environment.auth_domain_prefix", &*env.auth_domain_prefix)?
        .set_default("environment.auth_audience", &*env.auth_audience)?
        .set_default("environment.auth_client_id", &*env.auth_client_id)?
        .set_default("environment.auth_callback_url", &*env.auth_callback_url)?
        .set_default("logging.level", logging.level)?
        .set_default("logging.json", logging.json)?;

    Ok(builder)
}

fn env_overrides() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}
