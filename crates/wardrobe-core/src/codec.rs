//! The persisted representation: key names and value codecs.
//!
//! Three independently-addressable durable values, each an opaque string
//! to the storage layer. Decoding is an explicit tagged step: a value that
//! fails to decode is treated as absent by the caller, never a panic, and
//! never contaminates the other two keys.

use std::collections::BTreeSet;

use crate::error::DecodeError;
use crate::types::ItemId;

/// Key for the active item selection. Value: a single item id string.
pub const ACTIVE_KEY: &str = "appearance.active";

/// Key for purchased premium items. Value: a JSON list of id strings.
/// Default-owned items are implicit and never appear here.
pub const OWNED_KEY: &str = "appearance.owned";

/// Key for the currency balance. Value: a non-negative decimal string.
pub const BALANCE_KEY: &str = "wallet.balance";

/// Encode the active selection.
pub fn encode_active(id: &ItemId) -> String {
    id.as_str().to_string()
}

/// Decode the active selection. Whether the id exists in the catalog is
/// the caller's check; this only rejects the empty string.
pub fn decode_active(value: &str) -> Result<ItemId, DecodeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(ItemId::new(trimmed))
}

/// Encode the purchased-items set as a JSON list.
pub fn encode_owned(owned: &BTreeSet<ItemId>) -> String {
    serde_json::to_string(owned).expect("a set of strings always serializes")
}

/// Decode the purchased-items set.
pub fn decode_owned(value: &str) -> Result<BTreeSet<ItemId>, DecodeError> {
    serde_json::from_str(value).map_err(|e| DecodeError::NotAnIdList(e.to_string()))
}

/// Encode the balance as a decimal string.
pub fn encode_balance(balance: u64) -> String {
    balance.to_string()
}

/// Decode the balance. Negative and non-numeric values are rejected
/// (u64 parsing refuses a leading minus sign).
pub fn decode_balance(value: &str) -> Result<u64, DecodeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| DecodeError::NotAnInteger(trimmed.to_string()))
}
