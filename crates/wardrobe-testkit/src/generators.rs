//! Proptest generators for property-based testing.

use proptest::prelude::*;

use wardrobe::{Snapshot, Wardrobe};
use wardrobe_core::ItemId;
use wardrobe_store::Store;

/// One wardrobe operation, as generated input.
#[derive(Debug, Clone)]
pub enum Op {
    Select(ItemId),
    Purchase(ItemId),
    Adjust(i64),
}

impl Op {
    /// Apply this operation to a wardrobe.
    pub async fn apply<S: Store>(&self, wardrobe: &Wardrobe<S>) -> wardrobe::Result<Snapshot> {
        match self {
            Op::Select(id) => wardrobe.select_item(id).await,
            Op::Purchase(id) => wardrobe.purchase_item(id).await,
            Op::Adjust(delta) => wardrobe.adjust_balance(*delta).await,
        }
    }
}

/// Ids from the standard catalog, weighted toward the interesting ones.
pub fn known_item_id() -> impl Strategy<Value = ItemId> {
    prop_oneof![
        Just(ItemId::new("light")),
        Just(ItemId::new("dark")),
        Just(ItemId::new("ocean")),
        Just(ItemId::new("midnight")),
        Just(ItemId::new("aurora")),
    ]
}

/// Mostly known ids, with the occasional id the catalog has never heard of.
pub fn item_id() -> impl Strategy<Value = ItemId> {
    prop_oneof![
        8 => known_item_id(),
        1 => "[a-z]{4,10}".prop_map(ItemId::new),
    ]
}

/// A balance delta small enough to keep sequences interesting.
pub fn delta() -> impl Strategy<Value = i64> {
    -500i64..=500
}

/// A single operation.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        item_id().prop_map(Op::Select),
        item_id().prop_map(Op::Purchase),
        delta().prop_map(Op::Adjust),
    ]
}

/// A sequence of operations.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..=max_len)
}
