//! Tests for the gateway client

use super::SkyWalletClient;
use crate::crypto::body_digest;
use crate::types::{ClientConfig, OrderRequest, DEFAULT_GATEWAY_URL};
use base64::{engine::general_purpose, Engine as _};
use mockito::{Matcher, Server};
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{RsaPrivateKey, RsaPublicKey};
use rust_decimal::Decimal;
use serde_json::json;
use sha2::Sha256;
use std::time::Duration;

const TEST_PEM: &str = "-----BEGIN PUBLIC KEY-----\nplaceholder\n-----END PUBLIC KEY-----";

fn test_client(url: String) -> SkyWalletClient {
    let config = ClientConfig::new("test-key", TEST_PEM).with_url(url);
    SkyWalletClient::new(config).unwrap()
}

fn test_order_request() -> OrderRequest {
    OrderRequest::new(Decimal::new(1099, 2), "code_4242424_po", "98987ABC879798")
}

#[test]
fn test_client_creation() {
    let config = ClientConfig::new("test-key", TEST_PEM).with_url("https://example.com/api");
    let client = SkyWalletClient::new(config).unwrap();
    assert_eq!(client.url(), "https://example.com/api");
}

#[test]
fn test_client_creation_defaults_to_production_url() {
    let config = ClientConfig::new("test-key", TEST_PEM);
    let client = SkyWalletClient::new(config).unwrap();
    assert_eq!(client.url(), DEFAULT_GATEWAY_URL);
}

#[test]
fn test_client_creation_requires_api_key() {
    let config = ClientConfig::new("", TEST_PEM);
    let result = SkyWalletClient::new(config);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API KEY"));
}

#[test]
fn test_client_creation_requires_public_key() {
    let config = ClientConfig::new("test-key", "");
    let result = SkyWalletClient::new(config);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("publicKey"));
}

#[tokio::test]
async fn test_create_order_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/order")
        .match_header("Authorization", "sky-wallet <test-key>")
        .match_body(Matcher::Json(json!({
            "requestedAmount": "10.99",
            "invoiceNumber": "code_4242424_po",
            "SKU": "98987ABC879798"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": true,
                "result": {
                    "id": "5a219045538738d11a9be051",
                    "userId": "5a2189719bf5c7d0d3031837",
                    "requestedAmount": 10.99,
                    "receivedAmount": 0,
                    "receivedTransactions": [],
                    "commissionAmount": 0.315,
                    "integratedAddress": "ix12bxwtdiocQm4adwVnL1LGEj6FMU5E5B9fTYcqoP",
                    "paymentId": "d98f5143d7fd82c8",
                    "supportId": "TPLGSLD6",
                    "invoiceNumber": "code_4242424_po",
                    "SKU": "98987ABC879798",
                    "status": "new",
                    "updated": "2017-12-01T17:24:21.309Z",
                    "created": "2017-12-01T17:24:21.309Z"
                }
            })
            .to_string(),
        )
        .create_async().await;

    let client = test_client(server.url());
    let envelope = client.create_order(&test_order_request()).await;

    assert!(envelope.is_success());
    let order = envelope.result.unwrap();
    assert_eq!(order.id, "5a219045538738d11a9be051");
    assert_eq!(order.payment_id.as_deref(), Some("d98f5143d7fd82c8"));
    assert_eq!(
        order.integrated_address.as_deref(),
        Some("ix12bxwtdiocQm4adwVnL1LGEj6FMU5E5B9fTYcqoP")
    );
    assert_eq!(order.status.as_deref(), Some("new"));
}

#[tokio::test]
async fn test_create_order_transmits_optional_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/order")
        .match_body(Matcher::Json(json!({
            "requestedAmount": "10.99",
            "invoiceNumber": "code_4242424_po",
            "SKU": "98987ABC879798",
            "currency": "usd",
            "description": "Subscription renewal"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"status": true, "result": {"id": "abc"}}).to_string())
        .create_async().await;

    let client = test_client(server.url());
    let request = test_order_request()
        .with_currency("usd")
        .with_description("Subscription renewal")
        .with_language("");

    let envelope = client.create_order(&request).await;
    assert!(envelope.is_success());
    // The exact-body matcher proves empty/absent optionals were not sent.
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_rejects_non_positive_amount() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/order").expect(0).create_async().await;

    let client = test_client(server.url());

    for amount in [Decimal::ZERO, Decimal::new(-1099, 2)] {
        let request = OrderRequest::new(amount, "inv", "sku");
        let envelope = client.create_order(&request).await;

        assert!(!envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("Invalid requested amount"));
        assert_eq!(envelope.code, Some(552));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_rejects_long_invoice_number() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/order").expect(0).create_async().await;

    let client = test_client(server.url());
    let request = OrderRequest::new(Decimal::ONE, "x".repeat(21), "sku");
    let envelope = client.create_order(&request).await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Invalid invoice number"));
    assert_eq!(envelope.code, Some(552));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_rejects_long_sku() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/order").expect(0).create_async().await;

    let client = test_client(server.url());
    let request = OrderRequest::new(Decimal::ONE, "inv", "x".repeat(21));
    let envelope = client.create_order(&request).await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Invalid SKU"));
    assert_eq!(envelope.code, Some(552));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_passes_gateway_error_through() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/order")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": false,
                "message": "Only merchants may accept orders",
                "code": 553
            })
            .to_string(),
        )
        .create_async().await;

    let client = test_client(server.url());
    let envelope = client.create_order(&test_order_request()).await;

    assert!(!envelope.is_success());
    assert_eq!(
        envelope.message.as_deref(),
        Some("Only merchants may accept orders")
    );
    assert_eq!(envelope.code, Some(553));
}

#[tokio::test]
async fn test_create_order_wraps_opaque_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/order")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async().await;

    let client = test_client(server.url());
    let envelope = client.create_order(&test_order_request()).await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.code, Some(552));
    assert!(envelope.message.unwrap().contains("500"));
}

#[tokio::test]
async fn test_transport_failure_becomes_envelope() {
    // Non-routable address, so the request fails in the transport
    let config = ClientConfig::new("test-key", TEST_PEM)
        .with_url("http://10.255.255.1:9999")
        .with_timeout(Duration::from_millis(1));
    let client = SkyWalletClient::new(config).unwrap();

    let envelope = client.create_order(&test_order_request()).await;
    assert!(!envelope.is_success());
    assert_eq!(envelope.code, Some(552));
    assert!(!envelope.message.unwrap().is_empty());
}

#[tokio::test]
async fn test_exchange_rate_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rate/xmr/usd")
        .match_header("Authorization", "sky-wallet <test-key>")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"status": true, "result": {"rate": 158.23}}).to_string())
        .create_async().await;

    let client = test_client(server.url());
    let envelope = client.exchange_rate("xmr", "usd").await;

    assert!(envelope.is_success());
    assert_eq!(envelope.result.unwrap().rate.to_string(), "158.23");
}

#[tokio::test]
async fn test_exchange_rate_rejects_empty_base() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex("^/rate".to_string()))
        .expect(0)
        .create_async().await;

    let client = test_client(server.url());
    let envelope = client.exchange_rate("", "usd").await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Invalid base currency"));
    assert_eq!(envelope.code, Some(552));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_exchange_rate_rejects_empty_quote() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex("^/rate".to_string()))
        .expect(0)
        .create_async().await;

    let client = test_client(server.url());
    let envelope = client.exchange_rate("usd", "").await;

    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Invalid quote currency"));
    assert_eq!(envelope.code, Some(552));
    mock.assert_async().await;
}

// Webhook verification

fn webhook_keypair() -> (RsaPrivateKey, String) {
    let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap();
    let public_pem = RsaPublicKey::from(&private_key)
        .to_public_key_pem(rsa::pkcs8::LineEnding::LF)
        .unwrap();
    (private_key, public_pem)
}

fn sign_body(private_key: &RsaPrivateKey, body: &serde_json::Value) -> String {
    let digest = body_digest(body).unwrap();
    let signing_key = SigningKey::<Sha256>::new(private_key.clone());
    let signature = signing_key.sign(digest.as_bytes());
    general_purpose::STANDARD.encode(signature.to_bytes())
}

#[test]
fn test_verify_webhook_success() {
    let (private_key, public_pem) = webhook_keypair();
    let client = SkyWalletClient::new(ClientConfig::new("test-key", public_pem)).unwrap();

    let body = json!({"a": 1, "b": 2});
    let signature = sign_body(&private_key, &body);

    let mut payload = body.clone();
    payload["signature"] = json!(signature);

    let envelope = client.verify_webhook(payload);
    assert!(envelope.is_success());
    assert_eq!(envelope.result.unwrap(), body);
}

#[test]
fn test_verify_webhook_detects_tampering() {
    let (private_key, public_pem) = webhook_keypair();
    let client = SkyWalletClient::new(ClientConfig::new("test-key", public_pem)).unwrap();

    let body = json!({"a": 1, "b": 2});
    let signature = sign_body(&private_key, &body);

    // Mutate a protected field without re-signing
    let payload = json!({"a": 1, "b": 3, "signature": signature});

    let envelope = client.verify_webhook(payload);
    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Verification failed"));
    assert_eq!(envelope.code, Some(552));
}

#[test]
fn test_verify_webhook_is_field_order_independent() {
    let (private_key, public_pem) = webhook_keypair();
    let client = SkyWalletClient::new(ClientConfig::new("test-key", public_pem)).unwrap();

    let signature = sign_body(&private_key, &json!({"a": 1, "b": 2}));

    // Same body, different field order in the delivered payload
    let payload = json!({"b": 2, "signature": signature, "a": 1});

    let envelope = client.verify_webhook(payload);
    assert!(envelope.is_success());
}

#[test]
fn test_verify_webhook_requires_signature_field() {
    let (_, public_pem) = webhook_keypair();
    let client = SkyWalletClient::new(ClientConfig::new("test-key", public_pem)).unwrap();

    let envelope = client.verify_webhook(json!({"a": 1}));
    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Verification failed"));
    assert_eq!(envelope.code, Some(552));
}

#[test]
fn test_verify_webhook_with_bad_key_material() {
    // Present-but-unparseable key is a verification failure, not a
    // construction failure
    let client = SkyWalletClient::new(ClientConfig::new("test-key", "not a pem")).unwrap();

    let envelope = client.verify_webhook(json!({"a": 1, "signature": "c2ln"}));
    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("Verification failed"));
    assert_eq!(envelope.code, Some(552));
}
