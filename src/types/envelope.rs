//! Uniform success/error wrapper returned by every client operation

use crate::types::constants::codes;
use serde::{Deserialize, Serialize};

/// The envelope every operation resolves to
///
/// `status` distinguishes success from failure. Success carries `result`;
/// failure carries `message` and `code` (552 validation/generic, 553
/// authorization/system, 404 not found). The same shape is used for locally
/// produced envelopes and for envelopes deserialized verbatim from the
/// gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub status: bool,
    /// Operation result when `status` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Error message when `status` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error code when `status` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl<T> Envelope<T> {
    /// Create a success envelope wrapping a result
    pub fn success(result: T) -> Self {
        Self {
            status: true,
            result: Some(result),
            message: None,
            code: None,
        }
    }

    /// Create an error envelope
    ///
    /// An empty message falls back to `"Unknown error"` and a zero code to
    /// 552, matching the gateway's own defaults.
    pub fn error(message: impl Into<String>, code: u16) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };
        let code = if code == 0 { codes::VALIDATION } else { code };

        Self {
            status: false,
            result: None,
            message: Some(message),
            code: Some(code),
        }
    }

    /// Create an error envelope from a typed error
    pub fn from_error(err: &crate::SkyWalletError) -> Self {
        Self::error(err.to_string(), err.code())
    }

    /// Whether this is a success envelope
    pub fn is_success(&self) -> bool {
        self.status
    }

    /// Convert into a typed `Result`
    ///
    /// Success envelopes yield their result; error envelopes (and success
    /// envelopes missing a result, which the gateway never produces) become
    /// [`SkyWalletError::Gateway`](crate::SkyWalletError::Gateway).
    pub fn into_result(self) -> crate::Result<T> {
        match (self.status, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(crate::SkyWalletError::gateway(
                "Success envelope without result",
                codes::VALIDATION,
            )),
            (false, _) => Err(crate::SkyWalletError::gateway(
                self.message.unwrap_or_else(|| "Unknown error".to_string()),
                self.code.unwrap_or(codes::VALIDATION),
            )),
        }
    }
}
