//! # Wardrobe Store
//!
//! Storage abstraction for the wardrobe. Provides a trait-based interface
//! for durable named values with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts persistence behind the [`Store`] trait,
//! allowing the wardrobe to be storage-agnostic. The primary implementation
//! is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! The interface is deliberately weak: independent string values under
//! string keys, with no atomicity across keys and no transactions. The
//! wardrobe's consistency discipline is built on top of this contract,
//! not underneath it.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for reading/writing named values
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wardrobe_store::{SqliteStore, Store};
//!
//! async fn example() {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("wardrobe.db").unwrap();
//!
//!     // Or use an in-memory database for testing
//!     let store = SqliteStore::open_memory().unwrap();
//!
//!     store.set("wallet.balance", "2450").await.unwrap();
//!     let balance = store.get("wallet.balance").await.unwrap();
//! }
//! ```

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::Store;
