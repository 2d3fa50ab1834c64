//! End-to-end economy scenarios over an in-memory store.
//!
//! Covers the purchase/select/adjust transitions, the rejection taxonomy,
//! and hydration round-trips including corrupt and missing persisted keys.

use std::sync::Arc;

use wardrobe::core::codec;
use wardrobe::core::{Catalog, Item, ItemId};
use wardrobe::store::MemoryStore;
use wardrobe::{FieldOutcome, Rejection, Wardrobe, WardrobeConfig};

fn catalog() -> Catalog {
    Catalog::new(vec![
        Item::free("light", "Light"),
        Item::free("dark", "Dark"),
        Item::premium("ocean", "Ocean", 99),
        Item::premium("midnight", "Midnight", 199),
    ])
    .unwrap()
}

fn config(starting_balance: u64) -> WardrobeConfig {
    WardrobeConfig {
        starting_balance,
        ..Default::default()
    }
}

async fn seeded(starting_balance: u64) -> Wardrobe<MemoryStore> {
    let (wardrobe, _) =
        Wardrobe::hydrate(catalog(), MemoryStore::new(), config(starting_balance)).await;
    wardrobe
}

fn id(s: &str) -> ItemId {
    ItemId::new(s)
}

#[tokio::test]
async fn test_purchase_then_select_then_repurchase() {
    let wardrobe = seeded(2450).await;

    let snapshot = wardrobe.snapshot();
    assert_eq!(snapshot.balance, 2450);
    assert_eq!(snapshot.active_item, id("light"));
    assert!(snapshot.owned_items.contains(&id("dark")));
    assert!(!snapshot.owned_items.contains(&id("ocean")));

    // Purchase debits and grants in one step.
    let snapshot = wardrobe.purchase_item(&id("ocean")).await.unwrap();
    assert_eq!(snapshot.balance, 2351);
    assert!(snapshot.owned_items.contains(&id("ocean")));
    assert_eq!(snapshot.active_item, id("light"));

    // The new unlock can now be selected.
    let snapshot = wardrobe.select_item(&id("ocean")).await.unwrap();
    assert_eq!(snapshot.active_item, id("ocean"));

    // Repurchasing is rejected and charges nothing.
    let before = wardrobe.snapshot();
    let err = wardrobe.purchase_item(&id("ocean")).await.unwrap_err();
    assert_eq!(err, Rejection::AlreadyOwned(id("ocean")));
    assert_eq!(wardrobe.snapshot(), before);
}

#[tokio::test]
async fn test_insufficient_balance_changes_nothing() {
    let wardrobe = seeded(50).await;

    let before = wardrobe.snapshot();
    let err = wardrobe.purchase_item(&id("midnight")).await.unwrap_err();
    assert_eq!(
        err,
        Rejection::InsufficientBalance {
            balance: 50,
            required: 199,
        }
    );
    assert_eq!(wardrobe.snapshot(), before);
}

#[tokio::test]
async fn test_select_unowned_item_is_rejected() {
    let wardrobe = seeded(1000).await;

    let before = wardrobe.snapshot();
    let err = wardrobe.select_item(&id("midnight")).await.unwrap_err();
    assert_eq!(err, Rejection::NotOwned(id("midnight")));
    assert_eq!(wardrobe.snapshot().active_item, before.active_item);
}

#[tokio::test]
async fn test_unknown_item_is_rejected() {
    let wardrobe = seeded(1000).await;

    assert_eq!(
        wardrobe.select_item(&id("aurora")).await.unwrap_err(),
        Rejection::UnknownItem(id("aurora"))
    );
    assert_eq!(
        wardrobe.purchase_item(&id("aurora")).await.unwrap_err(),
        Rejection::UnknownItem(id("aurora"))
    );
}

#[tokio::test]
async fn test_free_items_cannot_be_purchased() {
    let wardrobe = seeded(1000).await;

    let err = wardrobe.purchase_item(&id("dark")).await.unwrap_err();
    assert_eq!(err, Rejection::AlreadyOwned(id("dark")));
    assert_eq!(wardrobe.snapshot().balance, 1000);
}

#[tokio::test]
async fn test_adjust_balance() {
    let wardrobe = seeded(100).await;

    let snapshot = wardrobe.adjust_balance(150).await.unwrap();
    assert_eq!(snapshot.balance, 250);

    let snapshot = wardrobe.adjust_balance(-250).await.unwrap();
    assert_eq!(snapshot.balance, 0);

    let err = wardrobe.adjust_balance(-1).await.unwrap_err();
    assert_eq!(
        err,
        Rejection::InsufficientBalance {
            balance: 0,
            required: 1,
        }
    );
}

#[tokio::test]
async fn test_full_scenario() {
    // Seed {balance=2450, owned={light,dark}, active=light}.
    let wardrobe = seeded(2450).await;

    let snapshot = wardrobe.purchase_item(&id("ocean")).await.unwrap();
    assert_eq!(snapshot.balance, 2351);
    assert!(snapshot.owned_items.contains(&id("ocean")));
    assert_eq!(snapshot.active_item, id("light"));

    let snapshot = wardrobe.select_item(&id("ocean")).await.unwrap();
    assert_eq!(snapshot.active_item, id("ocean"));

    let before = wardrobe.snapshot();
    assert_eq!(
        wardrobe.purchase_item(&id("ocean")).await.unwrap_err(),
        Rejection::AlreadyOwned(id("ocean"))
    );
    assert_eq!(wardrobe.snapshot(), before);

    // Force the balance down to 50, then try the more expensive item.
    let debit = 50i64 - before.balance as i64;
    wardrobe.adjust_balance(debit).await.unwrap();
    let before = wardrobe.snapshot();
    assert_eq!(before.balance, 50);

    assert_eq!(
        wardrobe.purchase_item(&id("midnight")).await.unwrap_err(),
        Rejection::InsufficientBalance {
            balance: 50,
            required: 199,
        }
    );
    assert_eq!(wardrobe.snapshot(), before);
}

#[tokio::test]
async fn test_round_trip_hydration() {
    let store = Arc::new(MemoryStore::new());

    let (first, _) = Wardrobe::hydrate(catalog(), store.clone(), config(2450)).await;
    first.purchase_item(&id("ocean")).await.unwrap();
    first.select_item(&id("ocean")).await.unwrap();
    let expected = first.snapshot();

    let (second, report) = Wardrobe::hydrate(catalog(), store.clone(), config(2450)).await;
    assert_eq!(second.snapshot(), expected);
    assert_eq!(report.active, FieldOutcome::Persisted);
    assert_eq!(report.owned, FieldOutcome::Persisted);
    assert_eq!(report.balance, FieldOutcome::Persisted);
    assert!(!report.active_repaired);
}

#[tokio::test]
async fn test_hydrate_empty_store_uses_seed_defaults() {
    let (wardrobe, report) =
        Wardrobe::hydrate(catalog(), MemoryStore::new(), config(2450)).await;

    let snapshot = wardrobe.snapshot();
    assert_eq!(snapshot.balance, 2450);
    assert_eq!(snapshot.active_item, id("light"));
    assert_eq!(
        snapshot.owned_items,
        [id("light"), id("dark")].into_iter().collect()
    );
    assert_eq!(report.active, FieldOutcome::Missing);
    assert_eq!(report.owned, FieldOutcome::Missing);
    assert_eq!(report.balance, FieldOutcome::Missing);
}

#[tokio::test]
async fn test_corrupt_balance_key_recovers_independently() {
    let store = MemoryStore::with_entries([
        (codec::BALANCE_KEY, "not-a-number"),
        (codec::OWNED_KEY, r#"["ocean"]"#),
        (codec::ACTIVE_KEY, "ocean"),
    ]);

    let (wardrobe, report) = Wardrobe::hydrate(catalog(), store, config(2450)).await;

    let snapshot = wardrobe.snapshot();
    assert_eq!(snapshot.balance, 2450); // seed default
    assert!(snapshot.owned_items.contains(&id("ocean"))); // preserved
    assert_eq!(snapshot.active_item, id("ocean")); // preserved
    assert_eq!(report.balance, FieldOutcome::Corrupt);
    assert_eq!(report.owned, FieldOutcome::Persisted);
    assert_eq!(report.active, FieldOutcome::Persisted);
}

#[tokio::test]
async fn test_hydrate_repairs_unowned_active_item() {
    // The active key survived a crash but the ownership entry did not.
    let store = MemoryStore::with_entries([
        (codec::ACTIVE_KEY, "midnight"),
        (codec::BALANCE_KEY, "10"),
    ]);

    let (wardrobe, report) = Wardrobe::hydrate(catalog(), store, config(0)).await;

    let snapshot = wardrobe.snapshot();
    assert_eq!(snapshot.active_item, id("light"));
    assert_eq!(snapshot.balance, 10);
    assert!(report.active_repaired);
}

#[tokio::test]
async fn test_hydrate_drops_unresolvable_owned_ids() {
    // "retired" was purchasable once but is gone from the catalog, and
    // "light" should never have been persisted at all.
    let store = MemoryStore::with_entries([(
        codec::OWNED_KEY,
        r#"["ocean", "retired", "light"]"#,
    )]);

    let (wardrobe, report) = Wardrobe::hydrate(catalog(), store, config(0)).await;

    let snapshot = wardrobe.snapshot();
    assert!(snapshot.owned_items.contains(&id("ocean")));
    assert!(!snapshot.owned_items.contains(&id("retired")));
    assert_eq!(report.owned_dropped, 2);
    assert!(!report.active_repaired);
}

#[tokio::test]
async fn test_reselecting_active_item_is_a_success() {
    let wardrobe = seeded(0).await;
    let snapshot = wardrobe.select_item(&id("light")).await.unwrap();
    assert_eq!(snapshot.active_item, id("light"));
}
