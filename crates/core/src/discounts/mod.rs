//! Discount breakdown
//!
//! The discount engine records, per line item, which rules applied and how
//! much each one took off. Entries are stored in the order the engine
//! produced them.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::rules::Rule;

/// Amounts a single rule discounted from a line item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DiscountData {
    /// Discount in the cart currency
    pub amount: Decimal,

    /// Discount in the base (website) currency
    #[serde(default)]
    pub base_amount: Decimal,

    /// Discount before any cap was applied, in the cart currency
    #[serde(default)]
    pub original_amount: Decimal,

    /// Discount before any cap was applied, in the base currency
    #[serde(default)]
    pub base_original_amount: Decimal,
}

impl DiscountData {
    /// Creates discount data where base and original amounts equal `amount`.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            base_amount: amount,
            original_amount: amount,
            base_original_amount: amount,
        }
    }
}

/// One rule application contributing to a line item's discount.
#[derive(Clone)]
pub struct DiscountBreakdownEntry {
    discount: DiscountData,
    rule: Arc<dyn Rule>,
}

impl DiscountBreakdownEntry {
    /// Pairs discount data with the rule that produced it.
    pub fn new(discount: DiscountData, rule: Arc<dyn Rule>) -> Self {
        Self { discount, rule }
    }

    /// Returns the discount amounts.
    pub fn discount(&self) -> &DiscountData {
        &self.discount
    }

    /// Returns the applied rule.
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }
}

impl Debug for DiscountBreakdownEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DiscountBreakdownEntry")
            .field("discount", &self.discount)
            .finish_non_exhaustive()
    }
}
