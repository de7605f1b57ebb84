//! Field resolvers
//!
//! Resolvers shape cart data for the query layer. State shared between the
//! resolvers of one query execution lives in a [`ResolutionContext`], created
//! per execution and dropped with it.

pub mod context;
pub mod errors;
pub mod item_prices;

pub use context::ResolutionContext;
pub use errors::ResolveError;
pub use item_prices::*;
