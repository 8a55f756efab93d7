//! Test helpers module
//!
//! Shared setup for the CoffeeShop integration tests: logging, temporary
//! settings files and scoped environment variable overrides.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Literal development record as consumers receive it
pub const DEVELOPMENT_JSON: &str = r#"{
  "productionMode": false,
  "apiBaseUrl": "https://127.0.0.1:5000",
  "authDomainPrefix": "dev-zcohrtwi.us",
  "authAudience": "image",
  "authClientId": "R4WKjK9e2rnK21egRSeVahBZLMZVYXhp",
  "authCallbackUrl": "http://localhost:8100"
}"#;

/// A settings file written into its own temporary directory
pub struct SettingsFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl SettingsFile {
    /// Write `contents` to `coffeeshop.toml` in a fresh temporary directory
    pub fn new(contents: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("coffeeshop.toml");
        std::fs::write(&path, contents)?;
        Ok(Self { dir, path })
    }
}

/// Sets environment variables for the lifetime of the guard.
///
/// Tests using this must be `#[serial]`.
pub struct EnvVars {
    keys: Vec<String>,
}

impl EnvVars {
    pub fn set(vars: &[(&str, &str)]) -> Self {
        let keys = vars
            .iter()
            .map(|(key, value)| {
                std::env::set_var(key, value);
                key.to_string()
            })
            .collect();
        Self { keys }
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for key in &self.keys {
            std::env::remove_var(key);
        }
    }
}
