//! Demo binary: a cart session against an in-memory inventory, persisted to
//! a local data directory so a second run starts from where this one ends.

use std::sync::Arc;

use tracing::{info, warn, Instrument};

use cart_store::lifecycle::{setup_tracing, CartSystem};
use cart_store::mirror::JsonFileMirror;
use cart_store::model::Product;
use cart_store::notify::ChannelSink;
use cart_store::oracle::InMemoryInventory;
use cart_store::store::{CartContext, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting cart demo");

    let inventory = InMemoryInventory::new();
    inventory.stock(Product::new(1, "Trail Sneaker", 129.9, "sneaker.png"), 2);
    inventory.stock(Product::new(2, "Canvas Slip-on", 59.9, "slipon.png"), 5);

    // The UI side of the notification channel: render each notice.
    let (sink, mut notices) = ChannelSink::channel();
    let toast_task = tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            warn!(%notice, "Toast");
        }
    });

    let system = CartSystem::start(
        StoreConfig::default(),
        CartContext {
            oracle: Arc::new(inventory),
            mirror: Arc::new(JsonFileMirror::new("data")),
            notifier: Arc::new(sink),
        },
    );

    let restored = system.client.snapshot();
    if !restored.is_empty() {
        info!(items = restored.len(), "Resuming persisted cart");
    }

    let session = async {
        // Two units in stock: the third add bounces.
        for _ in 0..3 {
            if let Err(e) = system.client.add(1).await {
                info!(error = %e, "Add rejected as expected");
            }
        }

        system.client.add(2).await.map_err(|e| e.to_string())?;
        system.client.set_quantity(2, 4).await.map_err(|e| e.to_string())?;
        system.client.set_quantity(1, 1).await.map_err(|e| e.to_string())?;

        for item in system.client.snapshot().items() {
            info!(
                product = %item.product.title,
                quantity = item.quantity,
                "In cart"
            );
        }
        Ok::<(), String>(())
    };
    session.instrument(tracing::info_span!("cart_session")).await?;

    system.shutdown().await?;
    toast_task.abort();

    info!("Demo completed");
    Ok(())
}
