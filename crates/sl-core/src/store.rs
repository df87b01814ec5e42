//! The campaign store: a flat price list characters buy equipment from.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single purchasable item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreItem {
    /// Display name, unique case-insensitively within the store.
    pub name: String,
    /// Price in coins. Never negative.
    pub price: i64,
}

/// The campaign's shared item catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    items: Vec<StoreItem>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the catalog.
    pub fn add(&mut self, name: impl Into<String>, price: i64) -> CoreResult<()> {
        let name = name.into();
        if price < 0 {
            return Err(CoreError::InvalidPrice(price));
        }
        if self.find(&name).is_some() {
            return Err(CoreError::DuplicateName {
                kind: "store item",
                name,
            });
        }
        self.items.push(StoreItem { name, price });
        Ok(())
    }

    /// Remove an item by name. Returns true if found.
    pub fn remove(&mut self, name: &str) -> bool {
        let lower = name.to_lowercase();
        let before = self.items.len();
        self.items.retain(|i| i.name.to_lowercase() != lower);
        self.items.len() < before
    }

    /// Look up an item by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&StoreItem> {
        let lower = name.to_lowercase();
        self.items.iter().find(|i| i.name.to_lowercase() == lower)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[StoreItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_find() {
        let mut store = Store::new();
        store.add("Rope", 5).unwrap();
        store.add("Torch", 1).unwrap();
        let item = store.find("rope").unwrap();
        assert_eq!(item.name, "Rope");
        assert_eq!(item.price, 5);
    }

    #[test]
    fn negative_price_rejected() {
        let mut store = Store::new();
        let err = store.add("Rope", -5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice(-5)));
    }

    #[test]
    fn zero_price_allowed() {
        let mut store = Store::new();
        store.add("Pebble", 0).unwrap();
        assert_eq!(store.find("pebble").unwrap().price, 0);
    }

    #[test]
    fn duplicate_names_rejected_case_insensitively() {
        let mut store = Store::new();
        store.add("Rope", 5).unwrap();
        let err = store.add("ROPE", 8).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_by_any_case() {
        let mut store = Store::new();
        store.add("Rope", 5).unwrap();
        assert!(store.remove("rOpE"));
        assert!(store.is_empty());
        assert!(!store.remove("Rope"));
    }
}
