//! Cryptographic utilities for webhook verification
//!
//! This module implements the signature-verification flow for inbound
//! gateway webhooks: canonicalizing a payload, hashing it, and checking the
//! hash against an RSA signature.
//!
//! # Architecture
//!
//! - [`signature`] - canonical JSON serialization, content digests, and
//!   detached RSA PKCS#1 v1.5 / SHA-256 verification
//!
//! # Examples
//!
//! ```no_run
//! use skywallet::crypto::{body_digest, verify_detached};
//! use serde_json::json;
//!
//! # fn example() -> skywallet::Result<()> {
//! let body = json!({"orderId": "5a219045538738d11a9be051", "status": "paid"});
//!
//! let digest = body_digest(&body)?;
//! let is_valid = verify_detached(&digest, "-----BEGIN PUBLIC KEY-----...", "base64-signature")?;
//!
//! if is_valid {
//!     println!("Webhook is authentic");
//! }
//! # Ok(())
//! # }
//! ```

pub mod signature;


// Re-export commonly used items
pub use signature::{body_digest, canonical_json, decode_public_key, verify_detached};
