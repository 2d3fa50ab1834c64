//! Configuration for the wardrobe.

use wardrobe_core::ItemId;

/// Seed policy: the values hydration falls back to when a persisted key
/// is absent, corrupt, or unreadable.
#[derive(Debug, Clone)]
pub struct WardrobeConfig {
    /// Balance granted to a fresh (or reset) installation.
    pub starting_balance: u64,

    /// The default active item. Must be a default-owned catalog item;
    /// when unset, the catalog's first default-owned item is used.
    pub default_active: Option<ItemId>,
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            starting_balance: 0,
            default_active: None,
        }
    }
}
