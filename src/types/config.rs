//! Client configuration

use std::time::Duration;
use url::Url;

/// Default gateway endpoint (production)
pub const DEFAULT_GATEWAY_URL: &str = "https://app.skywallet.com:9018/api";

/// SkyWallet client configuration
///
/// Constructed once and immutable for the life of the client. The API key
/// authenticates outbound requests; the public key is only used for webhook
/// signature verification.
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant API key sent in the Authorization header
    pub api_key: String,
    /// PEM-encoded RSA public key for webhook verification
    pub public_key: String,
    /// Base URL of the gateway API
    pub url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("public_key", &"<redacted>")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration against the production endpoint
    pub fn new(api_key: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            public_key: public_key.into(),
            url: DEFAULT_GATEWAY_URL.to_string(),
            timeout: None,
        }
    }

    /// Override the gateway base URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    ///
    /// A missing API key or public key is an unrecoverable misconfiguration,
    /// so it is reported here rather than as a per-request envelope.
    pub fn validate(&self) -> crate::Result<()> {
        if self.api_key.is_empty() {
            return Err(crate::SkyWalletError::config("You must set API KEY"));
        }

        if self.public_key.is_empty() {
            return Err(crate::SkyWalletError::config("You must set publicKey"));
        }

        if self.url.is_empty() {
            return Err(crate::SkyWalletError::config("Gateway URL cannot be empty"));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(crate::SkyWalletError::config(
                "Gateway URL must start with http:// or https://",
            ));
        }

        Url::parse(&self.url)
            .map_err(|e| crate::SkyWalletError::config(format!("Invalid gateway URL: {}", e)))?;

        Ok(())
    }
}
