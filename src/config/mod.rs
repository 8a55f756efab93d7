//! Configuration management module
//!
//! This module holds the client environment record and handles loading and
//! validation of it from the compiled defaults, TOML files and environment
//! variables.

pub mod environment;
pub mod provider;
pub mod settings;
pub mod validation;

pub use environment::{get, ClientView, Environment, DEVELOPMENT};
pub use provider::EnvironmentProvider;
pub use settings::{LoggingConfig, Settings};
