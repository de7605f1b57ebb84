//! Carts

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    discounts::DiscountBreakdownEntry, stores::Store, totals::Totals, uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// Shopping cart
#[derive(Debug, Clone)]
pub struct Cart {
    uuid: CartUuid,
    currency: &'static Currency,
    store: Store,
    items: Vec<CartItem>,
    totals: Option<Totals>,
}

impl Cart {
    /// Creates an empty cart priced in `currency`.
    pub fn new(uuid: CartUuid, currency: &'static Currency, store: Store) -> Self {
        Self {
            uuid,
            currency,
            store,
            items: Vec::new(),
            totals: None,
        }
    }

    /// Adds a line item, returning the cart.
    #[must_use]
    pub fn with_item(mut self, item: CartItem) -> Self {
        self.items.push(item);
        self
    }

    /// Attaches totals previously computed for this cart.
    #[must_use]
    pub fn with_totals(mut self, totals: Totals) -> Self {
        self.totals = Some(totals);
        self
    }

    /// Returns the cart identifier.
    pub fn uuid(&self) -> CartUuid {
        self.uuid
    }

    /// Returns the cart (quote) currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Returns the store the cart belongs to.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the stored totals, if any were attached.
    pub fn stored_totals(&self) -> Option<&Totals> {
        self.totals.as_ref()
    }

    /// Iterates over the line items, each paired with this cart.
    pub fn item_refs(&self) -> impl Iterator<Item = CartItemRef<'_>> {
        self.items.iter().map(|item| CartItemRef::new(self, item))
    }
}

/// Errors raised while building a line item.
#[derive(Debug, Error, PartialEq)]
pub enum CartItemError {
    /// `price * quantity` does not fit in a decimal (sku, price, quantity).
    #[error("row total for {0} overflows: {1} x {2}")]
    RowTotalOverflow(String, Decimal, u32),
}

/// A line item in a cart, with amounts already computed by the totals engine.
#[derive(Debug, Clone)]
pub struct CartItem {
    uuid: CartItemUuid,
    sku: String,
    quantity: u32,
    price: Decimal,
    row_total: Decimal,
    row_total_incl_tax: Decimal,
    discount_amount: Decimal,
    discount_breakdown: SmallVec<[DiscountBreakdownEntry; 2]>,
}

impl CartItem {
    /// Creates a line item whose row totals are `price * quantity` and which has
    /// no tax or discount.
    ///
    /// # Errors
    ///
    /// Returns [`CartItemError::RowTotalOverflow`] if the row total does not fit
    /// in a decimal.
    pub fn new(
        uuid: CartItemUuid,
        sku: impl Into<String>,
        quantity: u32,
        price: Decimal,
    ) -> Result<Self, CartItemError> {
        let sku = sku.into();

        let Some(row_total) = price.checked_mul(Decimal::from(quantity)) else {
            return Err(CartItemError::RowTotalOverflow(sku, price, quantity));
        };

        Ok(Self::with_row_total(uuid, sku, quantity, price, row_total))
    }

    /// Creates a line item with a row total computed elsewhere, and no tax or
    /// discount.
    pub fn with_row_total(
        uuid: CartItemUuid,
        sku: impl Into<String>,
        quantity: u32,
        price: Decimal,
        row_total: Decimal,
    ) -> Self {
        Self {
            uuid,
            sku: sku.into(),
            quantity,
            price,
            row_total,
            row_total_incl_tax: row_total,
            discount_amount: Decimal::ZERO,
            discount_breakdown: SmallVec::new(),
        }
    }

    /// Overrides the row totals.
    #[must_use]
    pub fn with_row_totals(mut self, row_total: Decimal, row_total_incl_tax: Decimal) -> Self {
        self.row_total = row_total;
        self.row_total_incl_tax = row_total_incl_tax;
        self
    }

    /// Sets the total discount amount.
    #[must_use]
    pub fn with_discount_amount(mut self, discount_amount: Decimal) -> Self {
        self.discount_amount = discount_amount;
        self
    }

    /// Appends a discount breakdown entry.
    #[must_use]
    pub fn with_discount(mut self, entry: DiscountBreakdownEntry) -> Self {
        self.discount_breakdown.push(entry);
        self
    }

    /// Returns the line item id.
    pub fn uuid(&self) -> CartItemUuid {
        self.uuid
    }

    /// Returns the product SKU.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Row total, excluding tax
    pub fn row_total(&self) -> Decimal {
        self.row_total
    }

    /// Row total, including tax
    pub fn row_total_incl_tax(&self) -> Decimal {
        self.row_total_incl_tax
    }

    /// Total discount applied to the row
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// Returns the discount breakdown in the order the rules were applied.
    pub fn discount_breakdown(&self) -> &[DiscountBreakdownEntry] {
        &self.discount_breakdown
    }
}

/// A line item together with the cart that owns it.
#[derive(Debug, Clone, Copy)]
pub struct CartItemRef<'a> {
    cart: &'a Cart,
    item: &'a CartItem,
}

impl<'a> CartItemRef<'a> {
    /// Pairs an item with its owning cart.
    pub fn new(cart: &'a Cart, item: &'a CartItem) -> Self {
        Self { cart, item }
    }

    /// Returns the owning cart.
    pub fn cart(&self) -> &'a Cart {
        self.cart
    }

    /// Returns the line item.
    pub fn item(&self) -> &'a CartItem {
        self.item
    }
}
