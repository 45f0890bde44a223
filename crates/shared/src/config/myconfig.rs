use anyhow::{Context, Result, anyhow};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.bigcommerce.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a single BigCommerce store.
#[derive(Clone)]
pub struct BigCommerceConfig {
    pub store_hash: String,
    pub auth_token: String,
    pub client_id: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for BigCommerceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigCommerceConfig")
            .field("store_hash", &self.store_hash)
            .field("auth_token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BigCommerceConfig {
    pub fn new(store_hash: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            store_hash: store_hash.into(),
            auth_token: auth_token.into(),
            client_id: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn init() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, `init` uses the process environment.
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_hash = lookup("BIGCOMMERCE_STORE_HASH")
            .context("Missing environment variable: BIGCOMMERCE_STORE_HASH")?;
        let auth_token = lookup("BIGCOMMERCE_AUTH_TOKEN")
            .context("Missing environment variable: BIGCOMMERCE_AUTH_TOKEN")?;

        if store_hash.trim().is_empty() {
            return Err(anyhow!("BIGCOMMERCE_STORE_HASH must not be empty"));
        }

        let client_id = lookup("BIGCOMMERCE_CLIENT_ID").filter(|v| !v.is_empty());

        let api_url = lookup("BIGCOMMERCE_API_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("BIGCOMMERCE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("BIGCOMMERCE_TIMEOUT_SECS must be a valid u64 integer")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            store_hash,
            auth_token,
            client_id,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Root of the v2 REST API for this store, always ending in `/`.
    pub fn base_url(&self) -> String {
        format!(
            "{}/stores/{}/v2/",
            self.api_url.trim_end_matches('/'),
            self.store_hash
        )
    }
}
