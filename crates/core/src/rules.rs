//! Discount Rules

use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::stores::{Store, StoreId};

/// A discount rule that has been applied to a line item.
#[automock]
pub trait Rule: Send + Sync {
    /// Returns the label shown to customers of the given store.
    fn store_label(&self, store: &Store) -> String;
}

/// Cart price rule with per-store display labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesRule {
    name: String,
    labels: FxHashMap<StoreId, String>,
}

impl SalesRule {
    /// Creates a rule with no labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: FxHashMap::default(),
        }
    }

    /// Sets the label for a store, returning the rule.
    #[must_use]
    pub fn with_label(mut self, store: StoreId, label: impl Into<String>) -> Self {
        self.labels.insert(store, label.into());
        self
    }

    /// Returns the internal rule name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Rule for SalesRule {
    fn store_label(&self, store: &Store) -> String {
        let label = self.labels.get(&store.id()).or_else(|| {
            self.labels
                .get(&StoreId::ADMIN)
                .filter(|label| !label.is_empty())
        });

        if let Some(label) = label {
            return label.clone();
        }

        warn!(
            rule = %self.name,
            store = store.code(),
            "discount rule has no label for store"
        );

        String::new()
    }
}
