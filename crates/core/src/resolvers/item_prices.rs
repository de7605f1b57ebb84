//! Cart item prices resolver

use serde::Serialize;
use tracing::debug;

use crate::{
    carts::{Cart, CartItemRef},
    money::MoneyValue,
    resolvers::{ResolutionContext, ResolveError},
    totals::TotalsCollector,
};

/// The resolved parent of a `prices` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentValue<'a> {
    /// The line item being resolved
    pub model: Option<CartItemRef<'a>>,
}

impl<'a> ParentValue<'a> {
    /// Creates a parent value carrying a line item.
    pub fn new(model: CartItemRef<'a>) -> Self {
        Self { model: Some(model) }
    }

    /// Returns the line item.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingModel`] when no line item was supplied.
    pub fn model(&self) -> Result<CartItemRef<'a>, ResolveError> {
        self.model.ok_or(ResolveError::MissingModel)
    }
}

impl<'a> From<CartItemRef<'a>> for ParentValue<'a> {
    fn from(model: CartItemRef<'a>) -> Self {
        Self::new(model)
    }
}

/// Prices of a single cart line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemPrices {
    /// Unit price
    pub price: MoneyValue,

    /// Row total, excluding tax
    pub row_total: MoneyValue,

    /// Row total, including tax
    pub row_total_including_tax: MoneyValue,

    /// Total discount on the row
    pub discount: MoneyValue,

    /// Discounts applied to the row, in the order they were applied
    pub discounts: Vec<Discount>,
}

/// A single applied discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discount {
    /// Store-scoped rule label
    pub label: String,

    /// Amount taken off by this rule
    pub amount: MoneyValue,
}

/// Resolves the `prices` field of a cart item.
#[derive(Debug, Clone)]
pub struct CartItemPriceResolver<C> {
    totals_collector: C,
}

impl<C: TotalsCollector> CartItemPriceResolver<C> {
    /// Creates a resolver backed by the given totals collector.
    pub fn new(totals_collector: C) -> Self {
        Self { totals_collector }
    }

    /// Resolves the prices of the line item carried by `parent`.
    ///
    /// Totals for the owning cart are collected on the first call for that
    /// cart within `context`, whether or not the cart has an address.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::MissingModel`]: no line item was supplied. Nothing is
    ///   collected.
    /// - [`ResolveError::Totals`]: the totals collector failed.
    pub fn resolve(
        &self,
        context: &mut ResolutionContext,
        parent: &ParentValue<'_>,
    ) -> Result<CartItemPrices, ResolveError> {
        let model = parent.model()?;
        let cart = model.cart();
        let item = model.item();

        context.totals_for(cart, &self.totals_collector)?;

        debug!(cart = %cart.uuid(), item = %item.uuid(), sku = item.sku(), "resolving item prices");

        let currency = cart.currency();

        Ok(CartItemPrices {
            price: MoneyValue::new(item.price(), currency),
            row_total: MoneyValue::new(item.row_total(), currency),
            row_total_including_tax: MoneyValue::new(item.row_total_incl_tax(), currency),
            discount: MoneyValue::new(item.discount_amount(), currency),
            discounts: discounts(model),
        })
    }

    /// Resolves every line item of `cart`, in item order.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Totals`] if the totals collector failed.
    pub fn resolve_cart(
        &self,
        context: &mut ResolutionContext,
        cart: &Cart,
    ) -> Result<Vec<CartItemPrices>, ResolveError> {
        cart.item_refs()
            .map(|model| self.resolve(context, &ParentValue::new(model)))
            .collect()
    }
}

fn discounts(model: CartItemRef<'_>) -> Vec<Discount> {
    let cart = model.cart();

    model
        .item()
        .discount_breakdown()
        .iter()
        .map(|entry| Discount {
            label: entry.rule().store_label(cart.store()),
            amount: MoneyValue::new(entry.discount().amount, cart.currency()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{
        carts::{CartItem, CartItemUuid, CartUuid},
        discounts::{DiscountBreakdownEntry, DiscountData},
        rules::MockRule,
        stores::{Store, StoreId},
        totals::{MockTotalsCollector, Totals, TotalsError},
    };

    use super::*;

    fn collector(times: usize) -> MockTotalsCollector {
        let mut collector = MockTotalsCollector::new();

        collector
            .expect_collect_totals()
            .times(times)
            .returning(|_| Ok(Totals::default()));

        collector
    }

    fn labelled_rule(label: &'static str) -> Arc<MockRule> {
        let mut rule = MockRule::new();

        rule.expect_store_label().return_const(label.to_string());

        Arc::new(rule)
    }

    #[test]
    fn missing_model_fails_without_collecting() {
        let resolver = CartItemPriceResolver::new(collector(0));
        let mut context = ResolutionContext::new();

        let result = resolver.resolve(&mut context, &ParentValue::default());

        assert_eq!(result, Err(ResolveError::MissingModel));
        assert_eq!(context.collected_carts(), 0);
    }

    #[test]
    fn resolves_amounts_in_cart_currency() -> TestResult {
        let item = CartItem::new(CartItemUuid::new(), "tee", 2, Decimal::new(1000, 2))?
            .with_row_totals(Decimal::new(2000, 2), Decimal::new(2200, 2))
            .with_discount_amount(Decimal::new(200, 2));
        let cart = Cart::new(CartUuid::new(), iso::USD, Store::default()).with_item(item);
        let resolver = CartItemPriceResolver::new(collector(1));
        let mut context = ResolutionContext::new();

        let prices = resolver.resolve_cart(&mut context, &cart)?;
        let prices = prices.first().ok_or("no prices resolved")?;

        assert_eq!(prices.price, MoneyValue::new(Decimal::new(1000, 2), iso::USD));
        assert_eq!(prices.row_total, MoneyValue::new(Decimal::new(2000, 2), iso::USD));
        assert_eq!(
            prices.row_total_including_tax,
            MoneyValue::new(Decimal::new(2200, 2), iso::USD)
        );
        assert_eq!(prices.discount, MoneyValue::new(Decimal::new(200, 2), iso::USD));
        assert!(prices.discounts.is_empty());

        Ok(())
    }

    #[test]
    fn discount_labels_use_the_cart_store() -> TestResult {
        let store = Store::new(StoreId(4), "fr");
        let mut rule = MockRule::new();

        rule.expect_store_label()
            .withf(|store| store.code() == "fr")
            .times(1)
            .return_const("Soldes".to_string());

        let item = CartItem::new(CartItemUuid::new(), "tee", 1, Decimal::TEN)?.with_discount(
            DiscountBreakdownEntry::new(DiscountData::new(Decimal::ONE), Arc::new(rule)),
        );
        let cart = Cart::new(CartUuid::new(), iso::EUR, store).with_item(item);
        let resolver = CartItemPriceResolver::new(collector(1));

        let prices = resolver.resolve_cart(&mut ResolutionContext::new(), &cart)?;

        assert_eq!(
            prices.first().map(|prices| prices.discounts.clone()),
            Some(vec![Discount {
                label: "Soldes".to_string(),
                amount: MoneyValue::new(Decimal::ONE, iso::EUR),
            }])
        );

        Ok(())
    }

    #[test]
    fn discounts_keep_breakdown_order() -> TestResult {
        let item = CartItem::new(CartItemUuid::new(), "tee", 1, Decimal::TEN)?
            .with_discount(DiscountBreakdownEntry::new(
                DiscountData::new(Decimal::ONE),
                labelled_rule("Rule A"),
            ))
            .with_discount(DiscountBreakdownEntry::new(
                DiscountData::new(Decimal::new(3, 0)),
                labelled_rule("Rule B"),
            ));
        let cart = Cart::new(CartUuid::new(), iso::USD, Store::default()).with_item(item);
        let resolver = CartItemPriceResolver::new(collector(1));

        let prices = resolver.resolve_cart(&mut ResolutionContext::new(), &cart)?;
        let discounts: Vec<(String, Decimal)> = prices
            .iter()
            .flat_map(|prices| prices.discounts.iter())
            .map(|discount| (discount.label.clone(), discount.amount.value))
            .collect();

        assert_eq!(
            discounts,
            [
                ("Rule A".to_string(), Decimal::ONE),
                ("Rule B".to_string(), Decimal::new(3, 0)),
            ]
        );

        Ok(())
    }

    #[test]
    fn collector_failures_propagate() -> TestResult {
        let cart = Cart::new(CartUuid::new(), iso::USD, Store::default())
            .with_item(CartItem::new(CartItemUuid::new(), "tee", 1, Decimal::ONE)?);
        let mut collector = MockTotalsCollector::new();

        collector
            .expect_collect_totals()
            .returning(|_| Err(TotalsError::Collector("tax service down".to_string())));

        let resolver = CartItemPriceResolver::new(collector);
        let result = resolver.resolve_cart(&mut ResolutionContext::new(), &cart);

        assert_eq!(
            result,
            Err(ResolveError::Totals(TotalsError::Collector(
                "tax service down".to_string()
            )))
        );

        Ok(())
    }
}
