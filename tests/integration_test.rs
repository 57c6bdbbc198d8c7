//! Full-system integration tests: `CartSystem` wiring, persistence across
//! restarts, and serialization of concurrent mutations.

use std::sync::Arc;

use cart_store::lifecycle::CartSystem;
use cart_store::mirror::InMemoryMirror;
use cart_store::model::{Cart, Product, ProductId};
use cart_store::notify::RecordingSink;
use cart_store::oracle::InMemoryInventory;
use cart_store::store::{CartContext, CartError, StoreConfig};

fn product(id: ProductId) -> Product {
    Product::new(id, format!("Product {id}"), 25.0, "product.png")
}

fn start_system(inventory: &InMemoryInventory, mirror: &InMemoryMirror, sink: &RecordingSink) -> CartSystem {
    CartSystem::start(
        StoreConfig::default(),
        CartContext {
            oracle: Arc::new(inventory.clone()),
            mirror: Arc::new(mirror.clone()),
            notifier: Arc::new(sink.clone()),
        },
    )
}

fn persisted_cart(mirror: &InMemoryMirror) -> Option<Cart> {
    mirror
        .payload("cart")
        .map(|payload| serde_json::from_slice(&payload).expect("persisted cart should be valid JSON"))
}

/// End-to-end walkthrough of a session against a product with two units in
/// stock, checking after every committed step that the persisted mirror is
/// exactly the in-memory snapshot.
#[tokio::test]
async fn full_cart_session() {
    let inventory = InMemoryInventory::new();
    inventory.stock(product(1), 2);
    let mirror = InMemoryMirror::new();
    let sink = RecordingSink::new();
    let system = start_system(&inventory, &mirror, &sink);

    system.client.add(1).await.expect("first add");
    assert_eq!(system.client.snapshot().quantity_of(1), 1);
    assert_eq!(persisted_cart(&mirror), Some(system.client.snapshot()));

    system.client.add(1).await.expect("second add");
    assert_eq!(system.client.snapshot().quantity_of(1), 2);
    assert_eq!(persisted_cart(&mirror), Some(system.client.snapshot()));

    let result = system.client.add(1).await;
    assert!(matches!(result, Err(CartError::OutOfStock { .. })));
    assert_eq!(system.client.snapshot().quantity_of(1), 2);

    system.client.set_quantity(1, 1).await.expect("shrink to one");
    assert_eq!(system.client.snapshot().quantity_of(1), 1);
    assert_eq!(persisted_cart(&mirror), Some(system.client.snapshot()));

    system.client.remove(1).await.expect("remove");
    assert!(system.client.snapshot().is_empty());
    assert_eq!(persisted_cart(&mirror), Some(Cart::new()));

    assert_eq!(sink.messages().len(), 1, "only the rejected add notifies");
    system.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let inventory = InMemoryInventory::new();
    inventory.stock(product(1), 5);
    inventory.stock(product(2), 5);
    let mirror = InMemoryMirror::new();
    let sink = RecordingSink::new();

    let first = start_system(&inventory, &mirror, &sink);
    first.client.add(1).await.unwrap();
    first.client.add(2).await.unwrap();
    first.client.add(2).await.unwrap();
    let before = first.client.snapshot();
    first.shutdown().await.unwrap();

    let second = start_system(&inventory, &mirror, &sink);
    // A no-op mutation round-trips the mailbox, so hydration has finished
    // by the time it resolves.
    second.client.set_quantity(1, 0).await.unwrap();

    assert_eq!(second.client.snapshot(), before);
    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn a_malformed_persisted_cart_hydrates_as_empty() {
    let inventory = InMemoryInventory::new();
    inventory.stock(product(1), 5);
    let mirror = InMemoryMirror::new();
    mirror.seed("cart", &b"definitely not json"[..]);
    let sink = RecordingSink::new();

    let system = start_system(&inventory, &mirror, &sink);
    system.client.set_quantity(1, 0).await.unwrap();
    assert!(system.client.snapshot().is_empty());
    assert!(sink.messages().is_empty(), "corrupt payload is not a rejection");

    // The next commit overwrites the corrupt slot with a valid payload.
    system.client.add(1).await.unwrap();
    assert_eq!(persisted_cart(&mirror), Some(system.client.snapshot()));
    system.shutdown().await.unwrap();
}

/// Overlapping adds from many tasks cannot overrun the stock ceiling: the
/// mailbox serializes them, so exactly `stock` commits succeed no matter the
/// interleaving of the callers.
#[tokio::test]
async fn concurrent_adds_cannot_overrun_the_stock_ceiling() {
    let inventory = InMemoryInventory::new();
    inventory.stock(product(1), 5);
    let mirror = InMemoryMirror::new();
    let sink = RecordingSink::new();
    let system = start_system(&inventory, &mirror, &sink);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move { client.add(1).await }));
    }

    let mut committed = 0;
    let mut out_of_stock = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => committed += 1,
            Err(CartError::OutOfStock { .. }) => out_of_stock += 1,
            Err(e) => panic!("unexpected rejection: {e}"),
        }
    }

    assert_eq!(committed, 5, "exactly the available units commit");
    assert_eq!(out_of_stock, 3);
    assert_eq!(system.client.snapshot().quantity_of(1), 5);
    assert_eq!(persisted_cart(&mirror), Some(system.client.snapshot()));
    assert_eq!(sink.messages().len(), 3, "one notice per rejected add");

    system.shutdown().await.unwrap();
}

/// A consumer can react to commits through the watch subscription instead of
/// polling snapshots.
#[tokio::test]
async fn watch_subscription_observes_commits() {
    let inventory = InMemoryInventory::new();
    inventory.stock(product(1), 5);
    let mirror = InMemoryMirror::new();
    let sink = RecordingSink::new();
    let system = start_system(&inventory, &mirror, &sink);

    let mut watcher = system.client.watch();
    system.client.add(1).await.unwrap();

    watcher.changed().await.expect("commit publishes a change");
    assert_eq!(watcher.borrow_and_update().quantity_of(1), 1);

    system.shutdown().await.unwrap();
}
