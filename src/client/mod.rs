//! SkyWallet gateway client
//!
//! This module provides the client for the SkyWallet payment gateway REST
//! API. The client exposes three operations: creating a payment order,
//! fetching an exchange rate, and verifying an inbound webhook signature.
//!
//! # Architecture
//!
//! - [`SkyWalletClient`] - Main client holding the immutable configuration
//!   and a shared HTTP client
//! - Request construction and response normalization live here; the
//!   signature flow delegates to [`crate::crypto`]
//!
//! Every operation resolves to an [`Envelope`]: local validation failures
//! and transport failures are reported through the envelope, never as a
//! panic or an `Err`. Only construction can fail, and only on unrecoverable
//! misconfiguration.
//!
//! # Examples
//!
//! ## Creating an order
//!
//! ```no_run
//! use skywallet::{ClientConfig, SkyWalletClient};
//! use skywallet::types::OrderRequest;
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> skywallet::Result<()> {
//! let config = ClientConfig::new("api-key", "-----BEGIN PUBLIC KEY-----...");
//! let client = SkyWalletClient::new(config)?;
//!
//! let request = OrderRequest::new(Decimal::new(1099, 2), "code_4242424_po", "98987ABC879798")
//!     .with_currency("usd");
//!
//! let envelope = client.create_order(&request).await;
//! if let Some(order) = envelope.result {
//!     println!("Pay to {}", order.integrated_address.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Verifying a webhook
//!
//! ```no_run
//! use skywallet::{ClientConfig, SkyWalletClient};
//! use serde_json::json;
//!
//! # fn example() -> skywallet::Result<()> {
//! let config = ClientConfig::new("api-key", "-----BEGIN PUBLIC KEY-----...");
//! let client = SkyWalletClient::new(config)?;
//!
//! let payload = json!({"orderId": "abc", "status": "paid", "signature": "..."});
//! let envelope = client.verify_webhook(payload);
//!
//! if envelope.is_success() {
//!     // envelope.result is the body with the signature stripped
//! }
//! # Ok(())
//! # }
//! ```

use crate::crypto;
use crate::types::{
    codes, ClientConfig, CurrencyCode, Envelope, OrderRequest, OrderResult, Rate, AUTH_SCHEME,
};
use crate::{Result, SkyWalletError};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Client for the SkyWallet payment gateway
///
/// Cheap to clone; concurrent calls share the configuration and the
/// underlying connection pool without locking.
#[derive(Debug, Clone)]
pub struct SkyWalletClient {
    /// Immutable client configuration
    config: ClientConfig,
    /// HTTP client
    client: Client,
}

impl SkyWalletClient {
    /// Create a new client from a configuration
    ///
    /// Validates the configuration and builds the HTTP client. A missing
    /// API key or public key fails here, not per request.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| SkyWalletError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The gateway base URL this client talks to
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Create a payment order
    ///
    /// Validates the request locally, then POSTs it to `/order`. The
    /// returned envelope carries the newly created order together with its
    /// integrated address and payment ID.
    pub async fn create_order(&self, request: &OrderRequest) -> Envelope<OrderResult> {
        if let Err(err) = request.validate() {
            tracing::debug!("Order request rejected before transmission: {}", err);
            return Envelope::from_error(&err);
        }

        tracing::debug!(
            "Order request body: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = self
            .client
            .post(format!("{}/order", self.config.url))
            .header("Authorization", self.auth_header())
            .json(request)
            .send()
            .await;

        self.normalize(response).await
    }

    /// Fetch the exchange rate for a base/quote currency pair
    pub async fn exchange_rate(&self, base: &str, quote: &str) -> Envelope<Rate> {
        let base = match CurrencyCode::parse(base) {
            Ok(code) => code,
            Err(_) => return Envelope::error("Invalid base currency", codes::VALIDATION),
        };

        let quote = match CurrencyCode::parse(quote) {
            Ok(code) => code,
            Err(_) => return Envelope::error("Invalid quote currency", codes::VALIDATION),
        };

        let response = self
            .client
            .get(format!(
                "{}/rate/{}/{}",
                self.config.url,
                encode_segment(base.as_str()),
                encode_segment(quote.as_str())
            ))
            .header("Authorization", self.auth_header())
            .send()
            .await;

        self.normalize(response).await
    }

    /// Verify an inbound webhook payload
    ///
    /// Strips the `signature` field, digests the remaining body in its
    /// canonical form, and checks the digest against the signature under
    /// the configured public key. Success wraps the protected body; any
    /// failure collapses to the gateway's fixed `"Verification failed"`
    /// envelope, with the underlying cause logged at debug level.
    pub fn verify_webhook(&self, payload: Value) -> Envelope<Value> {
        match self.try_verify(payload) {
            Ok(body) => Envelope::success(body),
            Err(err) => {
                tracing::debug!("Webhook verification failed: {}", err);
                Envelope::error("Verification failed", codes::VALIDATION)
            }
        }
    }

    fn try_verify(&self, payload: Value) -> Result<Value> {
        let Value::Object(mut body) = payload else {
            return Err(SkyWalletError::invalid_signature(
                "Payload is not a JSON object",
            ));
        };

        let signature = match body.remove("signature") {
            Some(Value::String(signature)) => signature,
            Some(_) => {
                return Err(SkyWalletError::invalid_signature(
                    "Signature field is not a string",
                ))
            }
            None => {
                return Err(SkyWalletError::invalid_signature(
                    "Payload has no signature field",
                ))
            }
        };

        // The hash covers only the protected body.
        let body = Value::Object(body);
        let digest = crypto::body_digest(&body)?;

        if crypto::verify_detached(&digest, &self.config.public_key, &signature)? {
            Ok(body)
        } else {
            Err(SkyWalletError::invalid_signature(
                "Signature does not match payload",
            ))
        }
    }

    fn auth_header(&self) -> String {
        format!("{} <{}>", AUTH_SCHEME, self.config.api_key)
    }

    /// Normalize a transport outcome into the caller-facing envelope
    ///
    /// 2xx responses are returned as the gateway's envelope verbatim. A
    /// non-2xx body that parses as a gateway error envelope passes through
    /// unchanged, so the gateway's 553/404 codes survive; anything else is
    /// wrapped with code 552.
    async fn normalize<T: DeserializeOwned>(
        &self,
        response: reqwest::Result<reqwest::Response>,
    ) -> Envelope<T> {
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Transport failure: {}", err);
                return Envelope::error(err.to_string(), codes::VALIDATION);
            }
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<Envelope<T>>().await {
                Ok(envelope) => envelope,
                Err(err) => {
                    tracing::error!("Failed to decode gateway response: {}", err);
                    Envelope::error(err.to_string(), codes::VALIDATION)
                }
            };
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        tracing::error!("Gateway returned status {}: {}", status, body);

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) if !envelope.is_success() => envelope,
            _ => Envelope::error(
                format!("Gateway returned status {}: {}", status, body),
                codes::VALIDATION,
            ),
        }
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
