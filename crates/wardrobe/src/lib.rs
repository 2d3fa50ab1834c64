//! # Wardrobe
//!
//! The unified API for a local, persisted entitlement and virtual-currency
//! store: which appearance items are unlocked, which one is active, and how
//! much currency the user holds.
//!
//! ## Overview
//!
//! The wardrobe provides a single-device, single-actor store for:
//!
//! - **Entitlements**: which catalog items the user has unlocked
//! - **Balance**: the virtual currency debited by purchases
//! - **Active selection**: the item currently in use
//!
//! ## Key Concepts
//!
//! - **Hydration**: state is rebuilt from three independent persisted keys
//!   at startup, falling back to seed defaults per key and self-repairing
//!   any inconsistency a partial write left behind.
//! - **Optimistic local commit**: every operation mutates the in-memory
//!   state first; the durable flush is best-effort and never rolls a
//!   session back.
//! - **Debit-first ordering**: a purchase writes the balance before the
//!   ownership grant, so a crash between the two writes can lose currency
//!   but never hands out an unpaid item.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wardrobe::{Wardrobe, WardrobeConfig};
//! use wardrobe::core::{Catalog, Item};
//! use wardrobe::store::SqliteStore;
//!
//! async fn example() {
//!     let catalog = Catalog::new(vec![
//!         Item::free("light", "Light"),
//!         Item::free("dark", "Dark"),
//!         Item::premium("ocean", "Ocean", 99),
//!     ])
//!     .unwrap();
//!
//!     let store = SqliteStore::open("wardrobe.db").unwrap();
//!     let config = WardrobeConfig {
//!         starting_balance: 2450,
//!         ..Default::default()
//!     };
//!
//!     let (wardrobe, report) = Wardrobe::hydrate(catalog, store, config).await;
//!     if report.active_repaired {
//!         // partial write recovered; the default item is active again
//!     }
//!
//!     let snapshot = wardrobe.snapshot();
//!     // wardrobe.purchase_item(&"ocean".into()).await?;
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `wardrobe::core` - Domain primitives (Catalog, Item, EntitlementState)
//! - `wardrobe::store` - Storage abstraction and SQLite

pub mod config;
pub mod entitlements;
pub mod error;

// Re-export component crates
pub use wardrobe_core as core;
pub use wardrobe_store as store;

// Re-export main types for convenience
pub use config::WardrobeConfig;
pub use entitlements::{FieldOutcome, HydrationReport, Snapshot, Wardrobe};
pub use error::{Rejection, Result};

// Re-export commonly used core types
pub use wardrobe_core::{Catalog, EntitlementState, Item, ItemId, Tier};
