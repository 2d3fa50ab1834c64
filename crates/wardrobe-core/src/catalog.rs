//! Catalog: the fixed, immutable table of items.
//!
//! Built once at startup, validated at construction, read-only afterwards.
//! Lookup of an unknown id returns `None`; callers treat that as a
//! validation failure, never a panic.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::types::{Item, ItemId, Tier};

/// The fixed list of items, with lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog from an item list, validating structural invariants:
    ///
    /// - ids are unique
    /// - at least one item is default-owned
    /// - default-owned items are Free with price 0
    /// - every Free item is default-owned, and Premium items never are
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
            if item.default_owned {
                if item.price != 0 {
                    return Err(CatalogError::PricedDefault(item.id.clone(), item.price));
                }
                if item.tier == Tier::Premium {
                    return Err(CatalogError::DefaultOwnedPremium(item.id.clone()));
                }
            } else if item.tier == Tier::Free {
                return Err(CatalogError::NonDefaultFree(item.id.clone()));
            }
        }

        if !items.iter().any(|i| i.default_owned) {
            return Err(CatalogError::NoDefaultItem);
        }

        Ok(Self { items, index })
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    /// All items, in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Ids of every default-owned item, in declaration order.
    pub fn default_owned_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items
            .iter()
            .filter(|i| i.default_owned)
            .map(|i| &i.id)
    }

    /// The designated default item: the first default-owned item.
    ///
    /// Guaranteed to exist by construction.
    pub fn default_item(&self) -> &Item {
        self.items
            .iter()
            .find(|i| i.default_owned)
            .expect("catalog construction guarantees a default-owned item")
    }
}
