//! Strong type definitions for the wardrobe.
//!
//! Item identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog item identifier.
///
/// Stable, unique within a catalog. This is what gets persisted, so the
/// string form is the canonical form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ItemId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The pricing tier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Granted to every user, never purchasable.
    Free,
    /// Unlocked by spending currency.
    Premium,
}

/// A catalog-defined unlockable item (a visual theme).
///
/// Immutable once the catalog is built. Every default-owned item has
/// price 0 and purchase attempts on it are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,

    /// Human-readable name for the presentation layer.
    pub display_name: String,

    /// Pricing tier.
    pub tier: Tier,

    /// Price in currency units. Meaningful only for Premium items.
    pub price: u64,

    /// Whether every user owns this item without purchasing it.
    pub default_owned: bool,
}

impl Item {
    /// Create a Free item. Free items are always default-owned.
    pub fn free(id: impl Into<ItemId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            tier: Tier::Free,
            price: 0,
            default_owned: true,
        }
    }

    /// Create a Premium item with the given price.
    pub fn premium(
        id: impl Into<ItemId>,
        display_name: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            tier: Tier::Premium,
            price,
            default_owned: false,
        }
    }

    /// Whether this item can be purchased at all.
    pub fn purchasable(&self) -> bool {
        self.tier == Tier::Premium && !self.default_owned
    }
}
