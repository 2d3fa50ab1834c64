//! The Wardrobe: unified API for entitlements and the currency balance.
//!
//! The wardrobe owns the in-memory entitlement state, hydrates it from the
//! store at startup, and is the only code that mutates it. Every mutation
//! commits in memory first and then flushes to the store best-effort; the
//! in-memory state is authoritative for the rest of the session.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use wardrobe_core::{codec, Catalog, EntitlementState, ItemId};
use wardrobe_store::Store;

use crate::config::WardrobeConfig;
use crate::error::{Rejection, Result};

/// Where a hydrated field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The persisted value was present and decoded.
    Persisted,
    /// No persisted value; the seed default was used.
    Missing,
    /// The persisted value failed to decode; the seed default was used.
    Corrupt,
    /// The read itself failed; the seed default was used.
    Unavailable,
}

impl FieldOutcome {
    /// Whether the seed default was used for this field.
    pub fn seeded(&self) -> bool {
        !matches!(self, FieldOutcome::Persisted)
    }
}

/// What hydration found, per persisted key, and what it had to repair.
///
/// Hydration itself never fails; this report is how a caller (or a log
/// reader) learns that storage was partially lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydrationReport {
    /// Outcome for the active-selection key.
    pub active: FieldOutcome,
    /// Outcome for the owned-set key.
    pub owned: FieldOutcome,
    /// Outcome for the balance key.
    pub balance: FieldOutcome,
    /// Whether the active item had to be forced back to the default
    /// because its ownership entry was missing.
    pub active_repaired: bool,
    /// Persisted owned ids dropped because they no longer resolve to a
    /// purchasable catalog item.
    pub owned_dropped: usize,
}

/// A read-only view of the entitlement state.
///
/// The owned set includes the catalog's default-owned items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The currently active item.
    pub active_item: ItemId,
    /// Every owned item id, defaults included.
    pub owned_items: BTreeSet<ItemId>,
    /// The currency balance.
    pub balance: u64,
}

/// The main wardrobe struct.
///
/// Provides a unified API for:
/// - Hydrating entitlement state from durable storage
/// - Reading a consistent snapshot
/// - Selecting the active item
/// - Purchasing items against the currency balance
/// - Adjusting the balance
///
/// Callers receive a handle to one constructed instance; there is no
/// ambient global.
pub struct Wardrobe<S: Store> {
    /// The fixed item table.
    catalog: Catalog,
    /// The storage backend.
    store: Arc<S>,
    /// Seed policy.
    config: WardrobeConfig,
    /// The authoritative in-memory state.
    state: RwLock<EntitlementState>,
}

impl<S: Store> Wardrobe<S> {
    // ─────────────────────────────────────────────────────────────────────────
    // Hydration
    // ─────────────────────────────────────────────────────────────────────────

    /// Reconstruct entitlement state from the store.
    ///
    /// Each of the three persisted keys is read and decoded independently;
    /// absence, corruption, and read failure all degrade to the seed
    /// default for that key only. After assembly, self-repair enforces the
    /// invariants the persisted image may have lost to a partial write:
    /// unresolvable owned ids are dropped and an unowned active item is
    /// forced back to the default. Hydration never fails.
    pub async fn hydrate(
        catalog: Catalog,
        store: S,
        config: WardrobeConfig,
    ) -> (Self, HydrationReport) {
        let default_active = default_active_id(&catalog, &config);

        let (active, active_outcome) = match store.get(codec::ACTIVE_KEY).await {
            Ok(Some(raw)) => match codec::decode_active(&raw) {
                Ok(id) => (id, FieldOutcome::Persisted),
                Err(e) => {
                    tracing::warn!(key = codec::ACTIVE_KEY, error = %e, "corrupt persisted value, using seed default");
                    (default_active.clone(), FieldOutcome::Corrupt)
                }
            },
            Ok(None) => (default_active.clone(), FieldOutcome::Missing),
            Err(e) => {
                tracing::warn!(key = codec::ACTIVE_KEY, error = %e, "storage read failed, using seed default");
                (default_active.clone(), FieldOutcome::Unavailable)
            }
        };

        let (owned_premium, owned_outcome) = match store.get(codec::OWNED_KEY).await {
            Ok(Some(raw)) => match codec::decode_owned(&raw) {
                Ok(owned) => (owned, FieldOutcome::Persisted),
                Err(e) => {
                    tracing::warn!(key = codec::OWNED_KEY, error = %e, "corrupt persisted value, using seed default");
                    (BTreeSet::new(), FieldOutcome::Corrupt)
                }
            },
            Ok(None) => (BTreeSet::new(), FieldOutcome::Missing),
            Err(e) => {
                tracing::warn!(key = codec::OWNED_KEY, error = %e, "storage read failed, using seed default");
                (BTreeSet::new(), FieldOutcome::Unavailable)
            }
        };

        let (balance, balance_outcome) = match store.get(codec::BALANCE_KEY).await {
            Ok(Some(raw)) => match codec::decode_balance(&raw) {
                Ok(balance) => (balance, FieldOutcome::Persisted),
                Err(e) => {
                    tracing::warn!(key = codec::BALANCE_KEY, error = %e, "corrupt persisted value, using seed default");
                    (config.starting_balance, FieldOutcome::Corrupt)
                }
            },
            Ok(None) => (config.starting_balance, FieldOutcome::Missing),
            Err(e) => {
                tracing::warn!(key = codec::BALANCE_KEY, error = %e, "storage read failed, using seed default");
                (config.starting_balance, FieldOutcome::Unavailable)
            }
        };

        let mut state = EntitlementState {
            owned_premium,
            balance,
            active,
        };

        // Self-repair. A partial flush can leave the three keys mutually
        // inconsistent; the in-memory image must still satisfy the
        // invariants before anything reads it.
        let before = state.owned_premium.len();
        state
            .owned_premium
            .retain(|id| catalog.get(id).is_some_and(|i| i.purchasable()));
        let owned_dropped = before - state.owned_premium.len();
        if owned_dropped > 0 {
            tracing::warn!(
                count = owned_dropped,
                "dropped persisted owned ids with no purchasable catalog item"
            );
        }

        let active_repaired = !state.owns(&catalog, &state.active);
        if active_repaired {
            tracing::warn!(
                active = %state.active,
                default = %default_active,
                "persisted active item is not owned, reverting to default"
            );
            state.active = default_active;
        }

        let report = HydrationReport {
            active: active_outcome,
            owned: owned_outcome,
            balance: balance_outcome,
            active_repaired,
            owned_dropped,
        };

        let wardrobe = Self {
            catalog,
            store: Arc::new(store),
            config,
            state: RwLock::new(state),
        };

        (wardrobe, report)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read Surface
    // ─────────────────────────────────────────────────────────────────────────

    /// A consistent snapshot of the current state.
    ///
    /// This is the only read surface; no mutable reference to the state
    /// ever escapes the wardrobe.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read().unwrap();
        self.snapshot_of(&state)
    }

    /// The item catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The seed policy this wardrobe was hydrated with.
    pub fn config(&self) -> &WardrobeConfig {
        &self.config
    }

    fn snapshot_of(&self, state: &EntitlementState) -> Snapshot {
        Snapshot {
            active_item: state.active.clone(),
            owned_items: state.owned_ids(&self.catalog),
            balance: state.balance,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Economy Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Make an owned item the active one.
    ///
    /// Rejects with [`Rejection::UnknownItem`] or [`Rejection::NotOwned`];
    /// the state is unchanged on rejection. On success the new selection is
    /// visible to readers before the durable write is even issued.
    pub async fn select_item(&self, id: &ItemId) -> Result<Snapshot> {
        let (changed, snapshot) = {
            let mut state = self.state.write().unwrap();

            if !self.catalog.contains(id) {
                return Err(Rejection::UnknownItem(id.clone()));
            }
            if !state.owns(&self.catalog, id) {
                return Err(Rejection::NotOwned(id.clone()));
            }

            let changed = state.active != *id;
            state.active = id.clone();
            (changed, self.snapshot_of(&state))
        };

        // Re-selecting the active item skips the redundant write.
        if changed {
            self.flush(codec::ACTIVE_KEY, codec::encode_active(id)).await;
        }
        Ok(snapshot)
    }

    /// Unlock a premium item by debiting its price from the balance.
    ///
    /// Rejects with [`Rejection::UnknownItem`], [`Rejection::AlreadyOwned`]
    /// (for free/default items and repeat purchases - never charged twice),
    /// or [`Rejection::InsufficientBalance`]; the state is unchanged on
    /// rejection. On success the debit and the grant are applied as one
    /// in-memory step: no reader can observe one without the other.
    pub async fn purchase_item(&self, id: &ItemId) -> Result<Snapshot> {
        let (balance_value, owned_value, snapshot) = {
            let mut state = self.state.write().unwrap();

            let item = match self.catalog.get(id) {
                Some(item) => item,
                None => return Err(Rejection::UnknownItem(id.clone())),
            };
            if item.default_owned || state.owned_premium.contains(id) {
                return Err(Rejection::AlreadyOwned(id.clone()));
            }
            if state.balance < item.price {
                return Err(Rejection::InsufficientBalance {
                    balance: state.balance,
                    required: item.price,
                });
            }

            state.balance -= item.price;
            state.owned_premium.insert(id.clone());

            (
                codec::encode_balance(state.balance),
                codec::encode_owned(&state.owned_premium),
                self.snapshot_of(&state),
            )
        };

        // The debit must land before the grant: a process death between
        // the two writes loses currency but never grants an unpaid item.
        self.flush(codec::BALANCE_KEY, balance_value).await;
        self.flush(codec::OWNED_KEY, owned_value).await;

        Ok(snapshot)
    }

    /// Apply a signed delta to the balance.
    ///
    /// A debit that would underflow rejects with
    /// [`Rejection::InsufficientBalance`] and changes nothing. A credit
    /// always succeeds (clamped at the u64 ceiling).
    pub async fn adjust_balance(&self, delta: i64) -> Result<Snapshot> {
        let (balance_value, snapshot) = {
            let mut state = self.state.write().unwrap();

            let new_balance = match state.balance.checked_add_signed(delta) {
                Some(balance) => balance,
                None if delta < 0 => {
                    return Err(Rejection::InsufficientBalance {
                        balance: state.balance,
                        required: delta.unsigned_abs(),
                    });
                }
                None => u64::MAX,
            };

            state.balance = new_balance;
            (codec::encode_balance(state.balance), self.snapshot_of(&state))
        };

        self.flush(codec::BALANCE_KEY, balance_value).await;
        Ok(snapshot)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Flush
    // ─────────────────────────────────────────────────────────────────────────

    /// Best-effort durable write. A failure is logged and dropped: the
    /// in-memory state stays authoritative for the session, only
    /// durability across restarts is at risk. No automatic retry.
    async fn flush(&self, key: &'static str, value: String) {
        if let Err(e) = self.store.set(key, &value).await {
            tracing::warn!(key, error = %e, "durable write failed, state kept in memory");
        }
    }
}

/// Resolve the configured default active item against the catalog.
///
/// A configured id that is not a default-owned catalog item is ignored in
/// favor of the catalog's first default-owned item.
fn default_active_id(catalog: &Catalog, config: &WardrobeConfig) -> ItemId {
    if let Some(id) = &config.default_active {
        if catalog.get(id).is_some_and(|i| i.default_owned) {
            return id.clone();
        }
        tracing::warn!(
            configured = %id,
            "configured default active item is not default-owned, using catalog default"
        );
    }
    catalog.default_item().id.clone()
}
