//! Exchange rate types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An exchange rate for a base/quote currency pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rate {
    /// Units of quote currency per unit of base currency
    pub rate: Decimal,
}
