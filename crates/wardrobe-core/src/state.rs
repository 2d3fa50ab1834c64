//! Entitlement state: the in-memory authoritative record.
//!
//! Owned exclusively by the store that hydrates it. Default-owned items are
//! never part of `owned_premium`; the full owned set is computed against the
//! catalog at read time, which makes the "defaults are always owned"
//! invariant structural rather than checked.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::types::ItemId;

/// The mutable entitlement record: what is unlocked, what is active,
/// and how much currency the user holds.
///
/// `balance` is a `u64`, so invariant 3 (balance >= 0) holds by
/// construction; transitions only need to guard subtraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementState {
    /// Purchased Premium item ids. Excludes default-owned items.
    pub owned_premium: BTreeSet<ItemId>,

    /// Currency balance.
    pub balance: u64,

    /// The currently active item. Must always be owned.
    pub active: ItemId,
}

impl EntitlementState {
    /// The seed state: nothing purchased, configured starting balance,
    /// the given item active (callers pass a default-owned id).
    pub fn seed(starting_balance: u64, active: ItemId) -> Self {
        Self {
            owned_premium: BTreeSet::new(),
            balance: starting_balance,
            active,
        }
    }

    /// Whether the given item is owned, per the catalog.
    pub fn owns(&self, catalog: &Catalog, id: &ItemId) -> bool {
        match catalog.get(id) {
            Some(item) => item.default_owned || self.owned_premium.contains(id),
            None => false,
        }
    }

    /// The full owned set: purchased items unioned with catalog defaults.
    pub fn owned_ids(&self, catalog: &Catalog) -> BTreeSet<ItemId> {
        let mut owned = self.owned_premium.clone();
        owned.extend(catalog.default_owned_ids().cloned());
        owned
    }

    /// Whether the state satisfies its invariants against the catalog:
    /// the active item is owned, and every purchased id resolves to a
    /// purchasable catalog item.
    pub fn is_consistent(&self, catalog: &Catalog) -> bool {
        self.owns(catalog, &self.active)
            && self
                .owned_premium
                .iter()
                .all(|id| catalog.get(id).is_some_and(|i| i.purchasable()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::free("light", "Light"),
            Item::free("dark", "Dark"),
            Item::premium("ocean", "Ocean", 99),
        ])
        .unwrap()
    }

    #[test]
    fn test_seed_state_owns_only_defaults() {
        let catalog = catalog();
        let state = EntitlementState::seed(2450, "light".into());
        assert!(state.owns(&catalog, &"light".into()));
        assert!(state.owns(&catalog, &"dark".into()));
        assert!(!state.owns(&catalog, &"ocean".into()));
        assert!(state.is_consistent(&catalog));
    }

    #[test]
    fn test_owned_ids_unions_defaults() {
        let catalog = catalog();
        let mut state = EntitlementState::seed(0, "light".into());
        state.owned_premium.insert("ocean".into());

        let owned = state.owned_ids(&catalog);
        assert!(owned.contains(&"light".into()));
        assert!(owned.contains(&"dark".into()));
        assert!(owned.contains(&"ocean".into()));
    }

    #[test]
    fn test_unknown_id_is_never_owned() {
        let catalog = catalog();
        let state = EntitlementState::seed(0, "light".into());
        assert!(!state.owns(&catalog, &"nope".into()));
    }

    #[test]
    fn test_inconsistent_when_active_not_owned() {
        let catalog = catalog();
        let state = EntitlementState::seed(0, "ocean".into());
        assert!(!state.is_consistent(&catalog));
    }
}
