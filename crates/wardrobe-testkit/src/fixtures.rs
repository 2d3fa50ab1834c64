//! Test fixtures and helpers.
//!
//! Common setup code plus instrumented store wrappers for exercising the
//! wardrobe's consistency discipline: write-order capture and fault
//! injection.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use wardrobe::{Wardrobe, WardrobeConfig};
use wardrobe_core::{Catalog, Item};
use wardrobe_store::{MemoryStore, Result, Store, StoreError};

/// The catalog used across the test suites: two free defaults and three
/// premium unlocks.
pub fn standard_catalog() -> Catalog {
    Catalog::new(vec![
        Item::free("light", "Light"),
        Item::free("dark", "Dark"),
        Item::premium("ocean", "Ocean", 99),
        Item::premium("midnight", "Midnight", 199),
        Item::premium("aurora", "Aurora", 349),
    ])
    .expect("standard catalog is valid")
}

/// A test fixture with the standard catalog and a seed config.
pub struct TestFixture {
    pub catalog: Catalog,
    pub config: WardrobeConfig,
}

impl TestFixture {
    /// Create a fixture with the standard catalog and a 2450 balance.
    pub fn new() -> Self {
        Self::with_balance(2450)
    }

    /// Create a fixture with the given starting balance.
    pub fn with_balance(starting_balance: u64) -> Self {
        Self {
            catalog: standard_catalog(),
            config: WardrobeConfig {
                starting_balance,
                ..Default::default()
            },
        }
    }

    /// Hydrate a wardrobe over a fresh in-memory store.
    pub async fn wardrobe(&self) -> Wardrobe<MemoryStore> {
        let (wardrobe, _) = Wardrobe::hydrate(
            self.catalog.clone(),
            MemoryStore::new(),
            self.config.clone(),
        )
        .await;
        wardrobe
    }

    /// Hydrate a wardrobe over the given store.
    pub async fn wardrobe_over<S: Store>(&self, store: S) -> Wardrobe<S> {
        let (wardrobe, _) =
            Wardrobe::hydrate(self.catalog.clone(), store, self.config.clone()).await;
        wardrobe
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A store that records every successful `set`, in order.
///
/// Used to assert the debit-before-grant write ordering.
pub struct RecordingStore {
    inner: MemoryStore,
    writes: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// The (key, value) pairs written so far, in write order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// Keys written so far, in write order.
    pub fn written_keys(&self) -> Vec<String> {
        self.writes().into_iter().map(|(k, _)| k).collect()
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value).await?;
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// A store that fails every `set` on the configured keys.
///
/// Reads are unaffected, so rehydrating over the same store shows exactly
/// what a crash between two writes leaves behind.
pub struct FailingStore {
    inner: MemoryStore,
    fail_keys: HashSet<String>,
}

impl FailingStore {
    /// Fail writes on the given keys; everything else passes through.
    pub fn failing_writes<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            inner: MemoryStore::new(),
            fail_keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Store for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_keys.contains(key) {
            return Err(StoreError::Unavailable(format!(
                "injected write failure for {}",
                key
            )));
        }
        self.inner.set(key, value).await
    }
}

/// A store where every operation fails.
pub struct UnavailableStore;

#[async_trait]
impl Store for UnavailableStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(StoreError::Unavailable("device storage offline".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Unavailable("device storage offline".into()))
    }
}
