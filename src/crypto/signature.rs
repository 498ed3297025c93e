//! Signature utilities

use crate::{Result, SkyWalletError};
use base64::{engine::general_purpose, Engine as _};
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use serde_json::Value;
use sha2::Sha256;

/// Serialize a JSON value into its canonical form
///
/// Canonical form is compact JSON with object keys in lexicographic order at
/// every nesting level. Two structurally equal payloads always canonicalize
/// to the same byte sequence, which keeps webhook digests deterministic no
/// matter how the sender ordered its fields.
pub fn canonical_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Compute the content digest of a webhook body
///
/// MD5 over the canonical JSON bytes, rendered as lowercase hex. MD5 is used
/// as a fast content hash here, not for collision resistance; integrity
/// comes from the RSA signature over the digest.
pub fn body_digest(body: &Value) -> Result<String> {
    let canonical = canonical_json(body)?;
    Ok(format!("{:x}", md5::compute(canonical.as_bytes())))
}

/// Decode a PEM-encoded RSA public key
///
/// Accepts PKCS#8 (`BEGIN PUBLIC KEY`) and PKCS#1 (`BEGIN RSA PUBLIC KEY`)
/// encodings.
pub fn decode_public_key(pem: &str) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| SkyWalletError::invalid_key(e.to_string()))
}

/// Verify a detached signature over a content digest
///
/// The digest string itself is the signed message: RSA PKCS#1 v1.5 with
/// SHA-256, signature transported as base64. Returns `Ok(false)` when the
/// signature is well-formed but does not match, and an error when the key or
/// signature material is malformed.
pub fn verify_detached(digest: &str, public_key_pem: &str, signature_b64: &str) -> Result<bool> {
    let public_key = decode_public_key(public_key_pem)?;

    let signature_bytes = general_purpose::STANDARD
        .decode(signature_b64)
        .map_err(|_| SkyWalletError::invalid_signature("Signature is not valid base64"))?;
    let signature = Signature::try_from(signature_bytes.as_slice())
        .map_err(|_| SkyWalletError::invalid_signature("Malformed signature"))?;

    let verifying_key = VerifyingKey::<Sha256>::new(public_key);
    Ok(verifying_key.verify(digest.as_bytes(), &signature).is_ok())
}
