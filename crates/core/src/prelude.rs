//! Prelude

pub use crate::{
    carts::{Cart, CartItem, CartItemError, CartItemRef, CartItemUuid, CartUuid},
    discounts::{DiscountBreakdownEntry, DiscountData},
    money::MoneyValue,
    resolvers::{
        CartItemPriceResolver, CartItemPrices, Discount, ParentValue, ResolutionContext,
        ResolveError,
    },
    rules::{Rule, SalesRule},
    stores::{Store, StoreId},
    totals::{StoredTotalsCollector, Totals, TotalsCollector, TotalsError},
};
