//! Resolution Context

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    carts::{Cart, CartUuid},
    totals::{Totals, TotalsCollector, TotalsError},
};

/// State scoped to a single query execution.
///
/// Totals are collected at most once per cart identifier for the lifetime of
/// the context. Two cart values sharing an identifier share an entry.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    totals: FxHashMap<CartUuid, Totals>,
}

impl ResolutionContext {
    /// Starts a new, empty pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the totals for `cart`, collecting them on first use.
    ///
    /// # Errors
    ///
    /// Returns the collector's [`TotalsError`]. Failures are not cached, so a
    /// later call retries the collector.
    pub fn totals_for<C>(&mut self, cart: &Cart, collector: &C) -> Result<&Totals, TotalsError>
    where
        C: TotalsCollector + ?Sized,
    {
        let uuid = cart.uuid();

        if self.totals.contains_key(&uuid) {
            trace!(cart = %uuid, "reusing collected totals");
        } else {
            let totals = collector.collect_totals(cart)?;

            debug!(
                cart = %uuid,
                grand_total = %totals.grand_total,
                "collected cart totals"
            );

            self.totals.insert(uuid, totals);
        }

        self.totals
            .get(&uuid)
            .ok_or(TotalsError::Unavailable(uuid))
    }

    /// Returns totals already collected in this pass.
    pub fn totals(&self, cart: CartUuid) -> Option<&Totals> {
        self.totals.get(&cart)
    }

    /// Number of carts whose totals were collected in this pass.
    pub fn collected_carts(&self) -> usize {
        self.totals.len()
    }
}
