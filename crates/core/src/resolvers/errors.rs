//! Resolver Errors

use thiserror::Error;

use crate::totals::TotalsError;

/// Errors raised while resolving a field.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    /// The parent value did not carry the line item.
    #[error("\"model\" value should be specified")]
    MissingModel,

    /// Totals collection failed.
    #[error(transparent)]
    Totals(#[from] TotalsError),
}

impl ResolveError {
    /// Whether the message is safe to show to API clients as-is.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::MissingModel)
    }
}
