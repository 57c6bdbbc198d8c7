use tracing::{error, info};

use crate::client::CartClient;
use crate::store::{self, CartContext, StoreConfig};

/// The runtime wrapper that owns the cart actor's task.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: Spawning the actor and joining it on shutdown
/// - **Dependency Wiring**: Injecting the oracle, mirror and sink as one context
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(StoreConfig::default(), context);
///
/// system.client.add(product_id).await?;
/// let cart = system.client.snapshot();
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for the running store.
    pub client: CartClient,

    /// Task handle for the actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Creates the store and spawns its actor with `context` injected.
    ///
    /// The actor hydrates itself from the mirror before serving the first
    /// request, so a snapshot taken after the first awaited operation
    /// already reflects any persisted cart.
    pub fn start(config: StoreConfig, context: CartContext) -> Self {
        let (actor, client) = store::new(config);
        let handle = tokio::spawn(actor.run(context));
        Self { client, handle }
    }

    /// Gracefully shuts the store down.
    ///
    /// Drops the system's client, which closes the mailbox once every other
    /// clone is dropped too; the actor drains queued requests and exits.
    /// Operations already accepted still resolve before the task finishes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
