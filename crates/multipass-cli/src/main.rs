//! Issues a multipass login URL for a customer against the configured
//! storefront. The heavy lifting lives in the `multipass` crate; this binary
//! only supplies configuration and prints the result.

mod config;

use anyhow::Context;
use multipass::{generate_token, CustomerData};
use tracing::debug;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // .env is optional; deployments set the variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("incomplete environment configuration")?;

    let customer = CustomerData::new(config.customer_email.clone()).with_field(
        "return_to",
        format!("https://{}/checkout", config.online_store),
    );

    debug!(store = %config.online_store, "generating multipass token");
    let token = generate_token(&config.multipass_secret, &customer)
        .context("failed to generate multipass token")?;

    println!("{}", login_url(&config.online_store, &token));
    Ok(())
}

/// Build the storefront login URL for a generated token.
fn login_url(domain: &str, token: &str) -> String {
    format!("https://{domain}/account/login/multipass/{token}")
}

#[cfg(test)]
mod tests {
    use super::login_url;

    #[test]
    fn login_url_embeds_token() {
        assert_eq!(
            login_url("shop.example.com", "abc123="),
            "https://shop.example.com/account/login/multipass/abc123="
        );
    }
}
