//! Cart totals
//!
//! Totals are computed by the totals engine, which lives outside this crate.
//! [`TotalsCollector`] is the seam the resolvers call through.

use mockall::automock;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::carts::{Cart, CartUuid};

/// Errors raised while collecting cart totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalsError {
    /// No totals are available for the cart.
    #[error("totals are not available for cart {0}")]
    Unavailable(CartUuid),

    /// The totals engine failed.
    #[error("failed to collect totals: {0}")]
    Collector(String),
}

/// Aggregate monetary figures for a cart, in the cart currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Totals {
    /// Sum of row totals, excluding tax
    pub subtotal: Decimal,

    /// Sum of row totals, including tax
    pub subtotal_incl_tax: Decimal,

    /// Sum of discounts across all rows
    pub discount_amount: Decimal,

    /// Tax charged on the cart
    pub tax_amount: Decimal,

    /// Amount payable
    pub grand_total: Decimal,
}

/// Computes aggregate totals for a cart.
#[automock]
pub trait TotalsCollector: Send + Sync {
    /// Collects totals for `cart`. Calling this more than once for the same
    /// cart must be safe.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalsError`] if totals cannot be produced.
    fn collect_totals(&self, cart: &Cart) -> Result<Totals, TotalsError>;
}

/// Returns the totals already stored on the cart, without recalculating them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredTotalsCollector;

impl TotalsCollector for StoredTotalsCollector {
    fn collect_totals(&self, cart: &Cart) -> Result<Totals, TotalsError> {
        cart.stored_totals()
            .copied()
            .ok_or(TotalsError::Unavailable(cart.uuid()))
    }
}
