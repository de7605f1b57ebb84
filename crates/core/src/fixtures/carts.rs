//! Cart Fixtures

use std::sync::Arc;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso;
use serde::Deserialize;

use crate::{
    carts::{Cart, CartItem, CartItemUuid, CartUuid},
    discounts::{DiscountBreakdownEntry, DiscountData},
    fixtures::FixtureError,
    rules::{Rule, SalesRule},
    stores::{Store, StoreId},
    totals::Totals,
};

/// Cart Fixture
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart id, generated when omitted
    #[serde(default)]
    pub uuid: Option<CartUuid>,

    /// Cart currency code (e.g. "USD")
    pub currency: String,

    /// Store the cart belongs to
    #[serde(default)]
    pub store: Store,

    /// Map of rule key -> rule fixture
    #[serde(default)]
    pub rules: FxHashMap<String, RuleFixture>,

    /// Totals previously computed for the cart
    #[serde(default)]
    pub totals: Option<Totals>,

    /// Line items, in cart order
    #[serde(default)]
    pub items: Vec<CartItemFixture>,
}

/// Rule Fixture
#[derive(Debug, Deserialize)]
pub struct RuleFixture {
    /// Labels keyed by store id; `0` is the default label
    #[serde(default)]
    pub labels: FxHashMap<StoreId, String>,
}

/// Cart Item Fixture
#[derive(Debug, Deserialize)]
pub struct CartItemFixture {
    /// Item id, generated when omitted
    #[serde(default)]
    pub uuid: Option<CartItemUuid>,

    /// Product SKU
    pub sku: String,

    /// Quantity, defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Unit price
    pub price: Decimal,

    /// Row total, defaults to `price * quantity`
    #[serde(default)]
    pub row_total: Option<Decimal>,

    /// Row total including tax, defaults to the row total
    #[serde(default)]
    pub row_total_including_tax: Option<Decimal>,

    /// Discount on the row
    #[serde(default)]
    pub discount_amount: Decimal,

    /// Discount breakdown, in application order
    #[serde(default)]
    pub discounts: Vec<DiscountFixture>,
}

/// Discount Fixture
#[derive(Debug, Deserialize)]
pub struct DiscountFixture {
    /// Key of the rule that applied
    pub rule: String,

    /// Discount amount
    pub amount: Decimal,

    /// Base currency amount, defaults to `amount`
    #[serde(default)]
    pub base_amount: Option<Decimal>,
}

fn default_quantity() -> u32 {
    1
}

impl TryFrom<CartFixture> for Cart {
    type Error = FixtureError;

    fn try_from(fixture: CartFixture) -> Result<Self, Self::Error> {
        let currency = iso::find(&fixture.currency)
            .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

        let rules: FxHashMap<String, Arc<dyn Rule>> = fixture
            .rules
            .into_iter()
            .map(|(key, rule_fixture)| {
                let rule = rule_fixture
                    .labels
                    .into_iter()
                    .fold(SalesRule::new(key.clone()), |rule, (store, label)| {
                        rule.with_label(store, label)
                    });

                (key, Arc::new(rule) as Arc<dyn Rule>)
            })
            .collect();

        let mut cart = Cart::new(fixture.uuid.unwrap_or_default(), currency, fixture.store);

        if let Some(totals) = fixture.totals {
            cart = cart.with_totals(totals);
        }

        for item_fixture in fixture.items {
            cart = cart.with_item(build_item(item_fixture, &rules)?);
        }

        Ok(cart)
    }
}

fn build_item(
    fixture: CartItemFixture,
    rules: &FxHashMap<String, Arc<dyn Rule>>,
) -> Result<CartItem, FixtureError> {
    let uuid = fixture.uuid.unwrap_or_default();

    let mut item = match fixture.row_total {
        Some(row_total) => CartItem::with_row_total(
            uuid,
            fixture.sku,
            fixture.quantity,
            fixture.price,
            row_total,
        ),
        None => CartItem::new(uuid, fixture.sku, fixture.quantity, fixture.price)?,
    };

    let row_total = item.row_total();
    let row_total_incl_tax = fixture.row_total_including_tax.unwrap_or(row_total);

    item = item
        .with_row_totals(row_total, row_total_incl_tax)
        .with_discount_amount(fixture.discount_amount);

    for discount in fixture.discounts {
        let rule = rules
            .get(&discount.rule)
            .ok_or_else(|| FixtureError::RuleNotFound(discount.rule.clone()))?;

        let data = DiscountData {
            base_amount: discount.base_amount.unwrap_or(discount.amount),
            ..DiscountData::new(discount.amount)
        };

        item = item.with_discount(DiscountBreakdownEntry::new(data, Arc::clone(rule)));
    }

    Ok(item)
}
