//! Lattice Carts
//!
//! Shapes cart line item prices for the storefront query API: unit price, row
//! totals, discount and the per-rule discount breakdown, each tagged with the
//! cart's currency.

pub mod carts;
pub mod discounts;
pub mod fixtures;
pub mod money;
pub mod prelude;
pub mod resolvers;
pub mod rules;
pub mod stores;
pub mod totals;
pub mod uuids;
