//! WordPress site and credential configuration, loaded from env.

use anyhow::{Context, Result};
use secrecy::SecretString;
use std::env;
use std::time::Duration;
use strum::{Display, EnumString};

/// How requests are authenticated. Chosen explicitly with `WORDPRESS_AUTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuthScheme {
    /// HTTP basic auth with an application password.
    #[default]
    Basic,
    /// Bearer token obtained from the JWT auth plugin (`/wp-json/jwt-auth/v1/token`).
    Jwt,
}

/// Scheme plus credentials.
#[derive(Debug)]
pub struct WordPressAuth {
    pub scheme: AuthScheme,
    pub username: String,
    pub password: SecretString,
}

/// Site URL, credentials and request timeout.
#[derive(Debug)]
pub struct WordPressConfig {
    /// Site root, without trailing slash (e.g. `https://blog.example.com`).
    pub site_url: String,
    pub auth: WordPressAuth,
    pub timeout: Duration,
}

impl WordPressConfig {
    /// Loads WORDPRESS_URL, WORDPRESS_USER, WORDPRESS_PASSWORD (required), WORDPRESS_AUTH
    /// (`basic` | `jwt`, default basic) and WORDPRESS_TIMEOUT_SECS (default 30).
    pub fn from_env() -> Result<Self> {
        let site_url = env::var("WORDPRESS_URL").context("WORDPRESS_URL not set")?;
        let username = env::var("WORDPRESS_USER").context("WORDPRESS_USER not set")?;
        let password = env::var("WORDPRESS_PASSWORD").context("WORDPRESS_PASSWORD not set")?;
        let scheme = match env::var("WORDPRESS_AUTH") {
            Ok(value) => value
                .trim()
                .parse::<AuthScheme>()
                .map_err(|_| anyhow::anyhow!("WORDPRESS_AUTH must be basic or jwt, got {}", value))?,
            Err(_) => AuthScheme::default(),
        };
        let timeout_secs = env::var("WORDPRESS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            auth: WordPressAuth {
                scheme,
                username,
                password: SecretString::from(password),
            },
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Checks that the site URL parses and uses http(s).
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.site_url)
            .with_context(|| format!("WORDPRESS_URL is not a valid URL: {}", self.site_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("WORDPRESS_URL must use http or https: {}", self.site_url);
        }
        Ok(())
    }
}
