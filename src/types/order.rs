//! Order request and result types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Maximum length of a merchant reference (invoice number, SKU)
pub const MERCHANT_REF_MAX_LEN: usize = 20;

/// A strictly positive payment amount
///
/// Fallible constructor instead of call-site checks: an `Amount` that exists
/// is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse an amount, rejecting zero and negative values
    pub fn new(value: Decimal) -> crate::Result<Self> {
        if value <= Decimal::ZERO {
            return Err(crate::SkyWalletError::validation("Amount must be positive"));
        }
        Ok(Self(value))
    }

    /// The underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// A merchant reference string: invoice number or SKU, at most 20 symbols
///
/// The gateway allows empty references, so only the length is constrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MerchantRef(String);

impl MerchantRef {
    /// Parse a merchant reference, rejecting strings over 20 characters
    pub fn parse(value: impl Into<String>) -> crate::Result<Self> {
        let value = value.into();
        if value.chars().count() > MERCHANT_REF_MAX_LEN {
            return Err(crate::SkyWalletError::validation(format!(
                "Merchant reference exceeds {} characters",
                MERCHANT_REF_MAX_LEN
            )));
        }
        Ok(Self(value))
    }

    /// The reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A currency code for rate queries
///
/// The gateway addresses rates as `/rate/{base}/{quote}`, so a code must be
/// non-empty to form a valid path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a currency code, rejecting empty or blank input
    pub fn parse(value: impl Into<String>) -> crate::Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(crate::SkyWalletError::validation(
                "Currency code cannot be empty",
            ));
        }
        Ok(Self(value))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn absent_or_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// An order creation request
///
/// Serialized with the gateway's wire field names. Optional fields that are
/// absent, or present but empty, are omitted from the transmitted body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Amount for the order
    #[serde(rename = "requestedAmount")]
    pub requested_amount: Decimal,
    /// Invoice number specified by the merchant, max 20 symbols
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
    /// SKU of the order specified by the merchant, max 20 symbols
    #[serde(rename = "SKU")]
    pub sku: String,
    /// Checkout page language
    #[serde(skip_serializing_if = "absent_or_empty")]
    pub language: Option<String>,
    /// Exchange rate agreed with the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Price in the merchant's fiat currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Fiat currency for `price`
    #[serde(skip_serializing_if = "absent_or_empty")]
    pub currency: Option<String>,
    /// Human-readable order description
    #[serde(skip_serializing_if = "absent_or_empty")]
    pub description: Option<String>,
    /// Return URL shown to the customer after payment
    #[serde(rename = "backToMerchantUrl", skip_serializing_if = "absent_or_empty")]
    pub back_to_merchant_url: Option<String>,
}

impl OrderRequest {
    /// Create an order request with the required fields
    pub fn new(
        requested_amount: Decimal,
        invoice_number: impl Into<String>,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            requested_amount,
            invoice_number: invoice_number.into(),
            sku: sku.into(),
            language: None,
            rate: None,
            price: None,
            currency: None,
            description: None,
            back_to_merchant_url: None,
        }
    }

    /// Set the checkout page language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the agreed exchange rate
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Set the fiat price
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the fiat currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the order description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the return URL
    pub fn with_back_to_merchant_url(mut self, url: impl Into<String>) -> Self {
        self.back_to_merchant_url = Some(url.into());
        self
    }

    /// Validate the required fields against the gateway's constraints
    ///
    /// Errors carry the gateway's documented messages, so they can be
    /// surfaced to callers as envelopes unchanged. The validated fields are
    /// exactly the fields transmitted.
    pub fn validate(&self) -> crate::Result<()> {
        Amount::new(self.requested_amount)
            .map_err(|_| crate::SkyWalletError::validation("Invalid requested amount"))?;

        MerchantRef::parse(self.invoice_number.as_str())
            .map_err(|_| crate::SkyWalletError::validation("Invalid invoice number"))?;

        MerchantRef::parse(self.sku.as_str())
            .map_err(|_| crate::SkyWalletError::validation("Invalid SKU"))?;

        Ok(())
    }
}

/// An order as returned by the gateway
///
/// Fields beyond `id` are optional so that envelope deserialization never
/// rejects a response the gateway considers valid; anything the gateway adds
/// beyond the documented fields is preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    /// Unique order id
    pub id: String,
    /// Merchant account id
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Requested amount
    #[serde(rename = "requestedAmount", skip_serializing_if = "Option::is_none")]
    pub requested_amount: Option<Decimal>,
    /// Amount received so far
    #[serde(rename = "receivedAmount", skip_serializing_if = "Option::is_none")]
    pub received_amount: Option<Decimal>,
    /// Transactions attributed to this order
    #[serde(
        rename = "receivedTransactions",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub received_transactions: Vec<Value>,
    /// Gateway commission
    #[serde(rename = "commissionAmount", skip_serializing_if = "Option::is_none")]
    pub commission_amount: Option<Decimal>,
    /// Integrated payment address for this order
    #[serde(rename = "integratedAddress", skip_serializing_if = "Option::is_none")]
    pub integrated_address: Option<String>,
    /// Payment ID correlating incoming transactions to the order
    #[serde(rename = "paymentId", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Support reference shown to the customer
    #[serde(rename = "supportId", skip_serializing_if = "Option::is_none")]
    pub support_id: Option<String>,
    /// Invoice number echoed back
    #[serde(rename = "invoiceNumber", skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// SKU echoed back
    #[serde(rename = "SKU", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Order status (e.g. "new")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Undocumented fields, passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
