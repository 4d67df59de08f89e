//! Environment-backed configuration for the issuer binary.
//!
//! The core library never reads process-wide state; every environment
//! lookup stops here.

use std::env;

use thiserror::Error;

/// Shared multipass secret from the storefront admin.
const MULTIPASS_KEY_VAR: &str = "MULTIPASS_KEY";

/// Storefront domain, e.g. `example.myshopify.com`.
const ONLINE_STORE_VAR: &str = "ONLINE_STORE";

/// Customer email to issue the demo login for (optional).
const CUSTOMER_EMAIL_VAR: &str = "CUSTOMER_EMAIL";

const DEFAULT_CUSTOMER_EMAIL: &str = "example@grovej.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing or empty environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub multipass_secret: String,
    pub online_store: String,
    pub customer_email: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            multipass_secret: require(MULTIPASS_KEY_VAR)?,
            online_store: require(ONLINE_STORE_VAR)?,
            customer_email: env::var(CUSTOMER_EMAIL_VAR)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_CUSTOMER_EMAIL.to_owned()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
