//! Error handling for CoffeeShop
//!
//! This module defines the error type used when loading, validating and
//! installing the client environment.

use thiserror::Error;

/// Main error type for CoffeeShop environment operations
#[derive(Error, Debug)]
pub enum CoffeeShopError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL in {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("Settings load error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Environment already installed")]
    AlreadyInstalled,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoffeeShop operations
pub type Result<T> = std::result::Result<T, CoffeeShopError>;

impl CoffeeShopError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CoffeeShopError::Config(_) => false,
            CoffeeShopError::InvalidUrl { .. } => false,
            CoffeeShopError::Load(_) => false,
            CoffeeShopError::Logging(_) => true,
            CoffeeShopError::AlreadyInstalled => true,
            CoffeeShopError::Serialization(_) => false,
            CoffeeShopError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoffeeShopError::Config(_) => ErrorSeverity::Critical,
            CoffeeShopError::InvalidUrl { .. } => ErrorSeverity::Critical,
            CoffeeShopError::Load(_) => ErrorSeverity::Critical,
            CoffeeShopError::Logging(_) => ErrorSeverity::Warning,
            CoffeeShopError::AlreadyInstalled => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
