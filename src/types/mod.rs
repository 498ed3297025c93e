//! Core types for the SkyWallet gateway client
//!
//! This module defines the data model shared by all client operations.
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`config`] - Client configuration and the production endpoint default
//! - [`envelope`] - The uniform success/error wrapper every operation returns
//! - [`order`] - Order requests, results, and the typed validation boundary
//! - [`rate`] - Exchange rate query results
//! - [`constants`] - Gateway error codes and the Authorization scheme
//!
//! # Examples
//!
//! ## Building an order request
//!
//! ```
//! use skywallet::types::OrderRequest;
//! use rust_decimal::Decimal;
//!
//! let request = OrderRequest::new(Decimal::new(1099, 2), "code_4242424_po", "98987ABC879798")
//!     .with_currency("usd")
//!     .with_description("Subscription renewal");
//!
//! assert!(request.validate().is_ok());
//! ```
//!
//! ## Configuring a client
//!
//! ```
//! use skywallet::types::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::new("api-key", "-----BEGIN PUBLIC KEY-----...")
//!     .with_timeout(Duration::from_secs(30));
//!
//! // Validation runs again at client construction
//! config.validate().unwrap();
//! ```

pub mod config;
pub mod constants;
pub mod envelope;
pub mod order;
pub mod rate;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_GATEWAY_URL};
pub use constants::{codes, AUTH_SCHEME};
pub use envelope::Envelope;
pub use order::{Amount, CurrencyCode, MerchantRef, OrderRequest, OrderResult, MERCHANT_REF_MAX_LEN};
pub use rate::Rate;
