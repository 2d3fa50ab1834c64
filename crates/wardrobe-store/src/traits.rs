//! Store trait: the abstract interface for durable named values.
//!
//! This trait allows the wardrobe to be storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// The Store trait: async read/write of named string values.
///
/// # Consistency Contract
///
/// This is deliberately weaker than a database:
///
/// - **No atomicity across keys**: two `set` calls are independent; a
///   process may die between them. Callers that need an ordering must
///   sequence the calls themselves.
/// - **Per-key read-after-write only**: a `get` issued after a completed
///   `set` to the same key on the same device returns the written value,
///   unless device storage was cleared or corrupted in between.
/// - **No multi-key transactions**: callers must never assume them.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, `spawn_blocking` is used internally to avoid blocking the
/// runtime.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<S: Store + ?Sized> Store for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}
