//! Configuration validation module
//!
//! This module provides validation functions for the client environment and
//! the ambient settings, so a misconfigured deployment fails at startup rather
//! than in the first request a consumer builds.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use super::{Environment, LoggingConfig, Settings};
use super::environment::parse_url;
use crate::utils::errors::{CoffeeShopError, Result};

/// Log levels accepted in [`LoggingConfig::level`]
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_environment(&settings.environment)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate the client environment record
pub fn validate_environment(env: &Environment) -> Result<()> {
    validate_absolute_url("api_base_url", &env.api_base_url)?;
    validate_auth_domain_prefix(&env.auth_domain_prefix)?;
    require_non_empty("auth_audience", &env.auth_audience)?;
    require_non_empty("auth_client_id", &env.auth_client_id)?;
    validate_absolute_url("auth_callback_url", &env.auth_callback_url)?;

    for field in insecure_production_urls(env)? {
        warn!(field = field, "Production environment uses a non-https URL");
    }

    Ok(())
}

/// URL fields of a production record whose scheme is not `https`
pub fn insecure_production_urls(env: &Environment) -> Result<Vec<&'static str>> {
    if !env.production_mode {
        return Ok(Vec::new());
    }

    let mut insecure = Vec::new();
    for (field, value) in [
        ("api_base_url", &env.api_base_url),
        ("auth_callback_url", &env.auth_callback_url),
    ] {
        if parse_url(field, value.trim())?.scheme() != "https" {
            insecure.push(field);
        }
    }

    Ok(insecure)
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoffeeShopError::Config(format!("{} is required", field)));
    }

    Ok(())
}

/// Validate that a URL field is absolute with an http(s) scheme and a host
fn validate_absolute_url(field: &'static str, value: &str) -> Result<()> {
    require_non_empty(field, value)?;

    let url = parse_url(field, value.trim())?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(CoffeeShopError::Config(format!(
            "{} must be an absolute URL with a host: {}",
            field, value
        )));
    }

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoffeeShopError::Config(format!(
            "{} must use http or https, got scheme: {}",
            field,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validate the identity-provider tenant prefix
fn validate_auth_domain_prefix(prefix: &str) -> Result<()> {
    static DOMAIN_PREFIX: OnceLock<Regex> = OnceLock::new();

    require_non_empty("auth_domain_prefix", prefix)?;

    let pattern = DOMAIN_PREFIX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.-]*$").expect("domain prefix pattern is valid")
    });

    if !pattern.is_match(prefix) {
        return Err(CoffeeShopError::Config(format!(
            "auth_domain_prefix must contain only letters, digits, '.' and '-': {}",
            prefix
        )));
    }

    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CoffeeShopError::Config(
            "Log level is required".to_string()
        ));
    }

    if !VALID_LOG_LEVELS.contains(&config.level.as_str()) {
        return Err(CoffeeShopError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, VALID_LOG_LEVELS)
        ));
    }

    if let Some(ref directory) = config.directory {
        if directory.trim().is_empty() {
            return Err(CoffeeShopError::Config(
                "Log directory cannot be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
