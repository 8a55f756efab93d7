//! CoffeeShop environment tool
//!
//! Loads, validates and prints the client environment. With the `template`
//! argument it prints a `coffeeshop.toml` holding the compiled defaults instead.

use anyhow::Context;
use tracing::info;

use CoffeeShop::{
    config::{provider, Settings},
    utils::logging,
};

fn main() -> anyhow::Result<()> {
    if std::env::args().nth(1).as_deref() == Some("template") {
        print!("{}", Settings::default().to_toml()?);
        return Ok(());
    }

    // Pick up COFFEESHOP_* overrides from a local .env file
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", CoffeeShop::info());

    if let Err(e) = settings.validate() {
        logging::log_config_error(&e, Some("settings validation"));
        return Err(e.into());
    }

    let environment = provider::install(settings.environment)?;

    println!("{}", serde_json::to_string_pretty(&environment.client_view())?);

    Ok(())
}
