//! Error types for the wardrobe core.

use thiserror::Error;

use crate::types::ItemId;

/// Errors detected while building a catalog.
///
/// A catalog that fails these checks is a programmer error in the item
/// table, so construction refuses it outright rather than letting the
/// store run with a table that can't uphold its invariants.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    #[error("catalog has no default-owned item")]
    NoDefaultItem,

    #[error("default-owned item {0} has non-zero price {1}")]
    PricedDefault(ItemId, u64),

    #[error("premium item {0} is marked default-owned")]
    DefaultOwnedPremium(ItemId),

    #[error("free item {0} is not default-owned")]
    NonDefaultFree(ItemId),
}

/// Errors decoding a persisted value.
///
/// Each persisted key decodes independently; a failure here means the
/// value for that key is treated as absent and the seed default is used.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty value")]
    Empty,

    #[error("not a non-negative integer: {0:?}")]
    NotAnInteger(String),

    #[error("not a list of item ids: {0}")]
    NotAnIdList(String),
}
