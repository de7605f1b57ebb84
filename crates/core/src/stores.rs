//! Stores

use serde::Deserialize;

/// Store identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct StoreId(pub u32);

impl StoreId {
    /// The admin store; its labels act as defaults for every other store.
    pub const ADMIN: StoreId = StoreId(0);
}

/// The store view a cart was created in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Store {
    id: StoreId,
    code: String,
}

impl Store {
    /// Creates a new store context.
    pub fn new(id: StoreId, code: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
        }
    }

    /// Returns the store id.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Returns the store code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreId(1), "default")
    }
}
