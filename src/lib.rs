//! CoffeeShop client environment
//!
//! Deployment constants for the CoffeeShop client application: the API server
//! base URL and the identity-provider tenant, audience, client id and callback
//! URL. This library exposes the compiled record, layered loading and
//! validation of overrides, and a shareable read-only provider.

#![allow(non_snake_case)]

pub mod config;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{Environment, EnvironmentProvider, Settings};
pub use crate::utils::errors::{CoffeeShopError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
