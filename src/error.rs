//! Error types for the SkyWallet client

use crate::types::constants::codes;
use thiserror::Error;

/// Result type alias for SkyWallet operations
pub type Result<T> = std::result::Result<T, SkyWalletError>;

/// Errors produced by the SkyWallet client
///
/// Only configuration errors abort client construction. Everything else is
/// normalized into an [`Envelope`](crate::types::Envelope) by the operation
/// handlers; these variants mostly exist as the typed layer underneath that
/// normalization and for callers using [`Envelope::into_result`](crate::types::Envelope::into_result).
#[derive(Debug, Error)]
pub enum SkyWalletError {
    /// Invalid or missing client configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A request parameter failed local validation
    #[error("{message}")]
    Validation {
        /// The gateway-style validation message (e.g. "Invalid SKU")
        message: String,
    },

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Public key material could not be parsed
    #[error("Invalid public key: {message}")]
    InvalidKey {
        /// Why the key was rejected
        message: String,
    },

    /// A webhook signature was malformed or did not verify
    #[error("Invalid signature: {message}")]
    InvalidSignature {
        /// Why the signature was rejected
        message: String,
    },

    /// The gateway returned an error envelope
    #[error("Gateway error ({code}): {message}")]
    Gateway {
        /// Message from the gateway envelope
        message: String,
        /// Gateway error code (552, 553 or 404)
        code: u16,
    },
}

impl SkyWalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid key error
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }

    /// Create an invalid signature error
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            message: message.into(),
        }
    }

    /// Create a gateway error from an error envelope
    pub fn gateway(message: impl Into<String>, code: u16) -> Self {
        Self::Gateway {
            message: message.into(),
            code,
        }
    }

    /// The gateway envelope code this error maps to
    pub fn code(&self) -> u16 {
        match self {
            Self::Gateway { code, .. } => *code,
            _ => codes::VALIDATION,
        }
    }
}
