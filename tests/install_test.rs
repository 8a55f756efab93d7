//! Process-wide install of the environment
//!
//! The install slot can be filled once per process, so this binary holds a
//! single test that walks through the whole lifecycle.

mod support;

use std::borrow::Cow;

use assert_matches::assert_matches;

use CoffeeShop::config::{get, provider, Environment, DEVELOPMENT};
use CoffeeShop::CoffeeShopError;
use support::*;

#[test]
fn test_install_lifecycle() {
    init_test_env();

    // Nothing installed yet: the compiled record is current
    assert!(std::ptr::eq(provider::current(), get()));

    // Invalid records never reach the slot
    let broken = Environment { auth_audience: Cow::Borrowed(" "), ..DEVELOPMENT };
    assert_matches!(provider::install(broken), Err(CoffeeShopError::Config(_)));
    assert!(std::ptr::eq(provider::current(), get()));

    let staging = Environment {
        api_base_url: Cow::Borrowed("https://api.staging.coffeeshop.example"),
        ..DEVELOPMENT
    };
    let installed = provider::install(staging.clone()).unwrap();
    assert_eq!(installed, &staging);
    assert!(std::ptr::eq(provider::current(), installed));

    // Second install is refused and leaves the first in place
    assert_matches!(provider::install(DEVELOPMENT), Err(CoffeeShopError::AlreadyInstalled));
    assert_eq!(provider::current().api_base_url, "https://api.staging.coffeeshop.example");

    // The compiled record itself never changes
    assert_eq!(get(), &DEVELOPMENT);
}
