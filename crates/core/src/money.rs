//! Money values exposed to the query layer

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use serde::Serialize;

/// An amount tagged with the currency code of the cart it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoneyValue {
    /// Decimal amount, serialized as a JSON number. Amounts beyond `f64`
    /// precision (about 15 significant digits) are rounded on output.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,

    /// ISO 4217 alpha code
    pub currency: &'static str,
}

impl MoneyValue {
    /// Tags `value` with the given currency.
    pub fn new(value: Decimal, currency: &'static Currency) -> Self {
        Self {
            value,
            currency: currency.iso_alpha_code,
        }
    }
}
