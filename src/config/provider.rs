//! Environment provider
//!
//! Hands the validated environment to the rest of the application. The
//! record is built once during startup and only read afterwards, so readers
//! share it without any locking.

use std::sync::{Arc, OnceLock};

use tracing::info;

use super::environment::{self, Environment};
use super::validation::validate_environment;
use super::Settings;
use crate::utils::errors::{CoffeeShopError, Result};

/// Process-wide environment installed at startup
static INSTALLED: OnceLock<Environment> = OnceLock::new();

/// Cheaply cloneable, read-only handle to a validated [`Environment`]
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    environment: Arc<Environment>,
}

impl EnvironmentProvider {
    /// Provider over the compiled environment
    pub fn compiled() -> Self {
        Self {
            environment: Arc::new(environment::get().clone()),
        }
    }

    /// Validate `environment` and wrap it
    pub fn new(environment: Environment) -> Result<Self> {
        validate_environment(&environment)?;
        log_environment(&environment);

        Ok(Self {
            environment: Arc::new(environment),
        })
    }

    /// Build a provider from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.environment.clone())
    }

    /// The full environment record
    pub fn get(&self) -> &Environment {
        &self.environment
    }
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::compiled()
    }
}

/// Validate `environment` and make it the process-wide record.
///
/// Only the first install succeeds; later calls return
/// [`CoffeeShopError::AlreadyInstalled`] and leave the installed record untouched.
pub fn install(environment: Environment) -> Result<&'static Environment> {
    validate_environment(&environment)?;

    let mut installed = false;
    let current = INSTALLED.get_or_init(|| {
        installed = true;
        environment
    });

    if !installed {
        return Err(CoffeeShopError::AlreadyInstalled);
    }

    log_environment(current);
    Ok(current)
}

/// The installed environment, or the compiled one when nothing was installed
pub fn current() -> &'static Environment {
    INSTALLED.get().unwrap_or_else(environment::get)
}

fn log_environment(env: &Environment) {
    info!(
        production_mode = env.production_mode,
        api_base_url = %env.api_base_url,
        auth_domain = %env.auth_domain(),
        auth_audience = %env.auth_audience,
        "Client environment loaded"
    );
}
