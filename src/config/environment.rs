//! Client environment record
//!
//! The named deployment values the client application reads at startup: where
//! the API server runs and how to reach the identity provider. The compiled
//! record below is what ships; edit it (or override it through settings) per
//! deployment.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::errors::{CoffeeShopError, Result};

/// Hosted identity-provider domain the tenant prefix is placed under
pub const AUTH_DOMAIN_SUFFIX: &str = "auth0.com";

/// Environment-specific constants consumed by the client application
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Environment {
    pub production_mode: bool,
    /// The running API server url
    pub api_base_url: Cow<'static, str>,
    /// Identity-provider tenant prefix, e.g. `dev-zcohrtwi.us`
    pub auth_domain_prefix: Cow<'static, str>,
    /// Audience set for the identity-provider application
    pub auth_audience: Cow<'static, str>,
    /// Client id generated for the identity-provider application
    pub auth_client_id: Cow<'static, str>,
    /// Base url of the running client application
    pub auth_callback_url: Cow<'static, str>,
}

/// Development deployment
pub const DEVELOPMENT: Environment = Environment {
    production_mode: false,
    api_base_url: Cow::Borrowed("https://127.0.0.1:5000"),
    auth_domain_prefix: Cow::Borrowed("dev-zcohrtwi.us"),
    auth_audience: Cow::Borrowed("image"),
    auth_client_id: Cow::Borrowed("R4WKjK9e2rnK21egRSeVahBZLMZVYXhp"),
    auth_callback_url: Cow::Borrowed("http://localhost:8100"),
};

static COMPILED: Environment = DEVELOPMENT;

/// Return the compiled environment record.
///
/// The same `'static` value is returned on every call.
pub fn get() -> &'static Environment {
    &COMPILED
}

/// Contract view of [`Environment`] with the field names consumers expect
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView<'a> {
    pub production_mode: bool,
    pub api_base_url: &'a str,
    pub auth_domain_prefix: &'a str,
    pub auth_audience: &'a str,
    pub auth_client_id: &'a str,
    pub auth_callback_url: &'a str,
}

impl Environment {
    /// Parsed API server base url
    pub fn api_base(&self) -> Result<Url> {
        parse_url("api_base_url", &self.api_base_url)
    }

    /// Parsed client callback url
    pub fn callback(&self) -> Result<Url> {
        parse_url("auth_callback_url", &self.auth_callback_url)
    }

    /// Resolve a resource path such as `drinks/3` against the API base url.
    ///
    /// The result always stays under the base url: absolute URLs and paths
    /// climbing out of it with `..` are rejected.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        if Url::parse(path).is_ok() {
            return Err(CoffeeShopError::Config(format!(
                "endpoint path must be relative to api_base_url: {}",
                path
            )));
        }

        let mut base = self.api_base()?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        let joined = base
            .join(path.trim_start_matches('/'))
            .map_err(|source| CoffeeShopError::InvalidUrl { field: "api_base_url", source })?;

        if joined.origin() != base.origin() || !joined.path().starts_with(base.path()) {
            return Err(CoffeeShopError::Config(format!(
                "endpoint path resolves outside api_base_url: {}",
                path
            )));
        }

        Ok(joined)
    }

    /// Fully qualified identity-provider host
    pub fn auth_domain(&self) -> String {
        format!("{}.{}", self.auth_domain_prefix, AUTH_DOMAIN_SUFFIX)
    }

    /// Hosted login page the client redirects to for an implicit-flow token
    pub fn authorize_url(&self) -> Result<Url> {
        let authorize = format!("https://{}/authorize", self.auth_domain());
        // Parsing only validates; the identity provider matches the registered string
        self.callback()?;
        let redirect_uri = self.auth_callback_url.trim();

        Url::parse_with_params(
            &authorize,
            &[
                ("audience", &*self.auth_audience),
                ("response_type", "token"),
                ("client_id", &*self.auth_client_id),
                ("redirect_uri", redirect_uri),
            ],
        )
        .map_err(|source| CoffeeShopError::InvalidUrl { field: "auth_domain_prefix", source })
    }

    pub fn client_view(&self) -> ClientView<'_> {
        ClientView {
            production_mode: self.production_mode,
            api_base_url: &self.api_base_url,
            auth_domain_prefix: &self.auth_domain_prefix,
            auth_audience: &self.auth_audience,
            auth_client_id: &self.auth_client_id,
            auth_callback_url: &self.auth_callback_url,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        DEVELOPMENT
    }
}

pub(crate) fn parse_url(field: &'static str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|source| CoffeeShopError::InvalidUrl { field, source })
}
