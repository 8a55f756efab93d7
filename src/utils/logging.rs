//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the CoffeeShop environment tooling.

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{CoffeeShopError, ErrorSeverity, Result};

/// File name prefix of the daily-rolling log files
pub const LOG_FILE_PREFIX: &str = "coffeeshop.log";

/// Initialize logging based on configuration.
///
/// Console output goes to stderr. When a log directory is configured the
/// returned guard must be held for as long as file logging should flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| CoffeeShopError::Logging(e.to_string()))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(directory)
                .map_err(|e| CoffeeShopError::Logging(format!("log directory {}: {}", directory, e)))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    let initialized = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    initialized.map_err(|e| CoffeeShopError::Logging(e.to_string()))?;

    info!(
        level = %config.level,
        json = config.json,
        directory = config.directory.as_deref(),
        "Logging initialized"
    );
    Ok(guard)
}

/// Log a configuration failure at a level matching its severity
pub fn log_config_error(err: &CoffeeShopError, context: Option<&str>) {
    match err.severity() {
        ErrorSeverity::Critical | ErrorSeverity::Error => error!(
            error = %err,
            severity = %err.severity(),
            context = context,
            "Configuration error occurred"
        ),
        ErrorSeverity::Warning | ErrorSeverity::Info => warn!(
            error = %err,
            severity = %err.severity(),
            context = context,
            "Configuration problem ignored"
        ),
    }
}
