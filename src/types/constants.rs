//! Common constants for the gateway wire protocol

/// Authorization header scheme used by the gateway
pub const AUTH_SCHEME: &str = "sky-wallet";

/// Gateway error codes
pub mod codes {
    /// Validation or generic failure
    pub const VALIDATION: u16 = 552;
    /// Authorization or system failure
    pub const SYSTEM: u16 = 553;
    /// Resource not found
    pub const NOT_FOUND: u16 = 404;

    /// Check if a code is one the gateway documents
    pub fn is_known(code: u16) -> bool {
        matches!(code, VALIDATION | SYSTEM | NOT_FOUND)
    }
}
