//! # SkyWallet Rust Client
//!
//! A **type-safe** Rust client for the SkyWallet cryptocurrency payment
//! gateway.
//!
//! ## Features
//!
//! - **Order creation**: Create payment orders with integrated addresses and
//!   payment IDs for transaction attribution
//! - **Exchange rates**: Fetch gateway exchange rates for currency pairs
//! - **Webhook verification**: Verify inbound webhook signatures
//!   (canonical-JSON digest + RSA) before trusting their contents
//! - **Uniform envelopes**: Every operation resolves to the gateway's
//!   `{status, result, message, code}` envelope, for local and remote
//!   failures alike
//! - **Typed validation**: Fallible parsers ([`types::Amount`],
//!   [`types::MerchantRef`], [`types::CurrencyCode`]) reject invalid input
//!   before anything touches the network
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skywallet::{ClientConfig, SkyWalletClient};
//! use skywallet::types::OrderRequest;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Keys are required; the production endpoint is the default URL
//!     let config = ClientConfig::new(
//!         "your-api-key",
//!         "-----BEGIN PUBLIC KEY-----\n...\n-----END PUBLIC KEY-----",
//!     );
//!     let client = SkyWalletClient::new(config)?;
//!
//!     let request = OrderRequest::new(
//!         Decimal::new(1099, 2), // 10.99
//!         "code_4242424_po",
//!         "98987ABC879798",
//!     )
//!     .with_currency("usd")
//!     .with_description("Premium subscription");
//!
//!     let envelope = client.create_order(&request).await;
//!     match envelope.result {
//!         Some(order) => println!(
//!             "Order {} ready, pay to {}",
//!             order.id,
//!             order.integrated_address.unwrap_or_default()
//!         ),
//!         None => eprintln!(
//!             "Gateway rejected the order: {} (code {})",
//!             envelope.message.unwrap_or_default(),
//!             envelope.code.unwrap_or_default()
//!         ),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **`client`**: The gateway client and its three operations
//! - **`types`**: Configuration, envelopes, and the order/rate data model
//! - **`crypto`**: Canonical JSON, content digests, and RSA signature
//!   verification for webhooks
//! - **`error`**: Error handling
//!
//! ## Error Model
//!
//! Operations never return `Err`: local validation failures and transport
//! failures are reported through the same [`Envelope`](types::Envelope)
//! shape the gateway uses, with code 552 for validation/generic failures,
//! 553 for authorization/system failures, and 404 for missing resources.
//! The single exception is client construction, which fails fast on
//! unrecoverable misconfiguration (missing API key or public key).

pub mod client;
pub mod crypto;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use client::SkyWalletClient;
pub use error::{Result, SkyWalletError};
pub use types::{ClientConfig, Envelope, OrderRequest, OrderResult, Rate, DEFAULT_GATEWAY_URL};

/// Current version of the skywallet library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
