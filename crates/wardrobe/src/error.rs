//! Error types for the wardrobe facade.
//!
//! Operations reject with a reason code instead of failing: the
//! presentation layer renders rejections inline ("insufficient balance")
//! and must never hit a crash boundary for an expected outcome. Storage
//! failures never surface here at all - they are logged and the in-memory
//! state stays authoritative for the session.

use thiserror::Error;
use wardrobe_core::ItemId;

/// Why an operation was rejected. The state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The id does not resolve to a catalog item. A caller bug, but a
    /// non-fatal one.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Selecting an item that has not been unlocked.
    #[error("item not owned: {0}")]
    NotOwned(ItemId),

    /// Purchasing an item that is already owned (or is free by default).
    /// Idempotent from the user's perspective; never charged twice.
    #[error("item already owned: {0}")]
    AlreadyOwned(ItemId),

    /// The purchase or debit would drive the balance negative.
    #[error("insufficient balance: have {balance}, need {required}")]
    InsufficientBalance {
        /// The current balance.
        balance: u64,
        /// The amount the operation needed.
        required: u64,
    },
}

/// Result type for wardrobe operations.
pub type Result<T> = std::result::Result<T, Rejection>;
