//! # The Cart Actor
//!
//! This module defines the `CartActor`, the server half of the store. It owns
//! the cart and processes mailbox messages sequentially, ensuring exclusive
//! access to the state without any locking.
//!
//! # Architecture Note
//! The actor is the concurrency discipline. A mutating operation spans two
//! suspension points (the stock lookup and the mirror write) and nothing
//! may commit in between, or two overlapping adds could both pass a stale
//! stock check. Processing one message at a time gives exactly that
//! guarantee, with no `Mutex` around the cart.
//!
//! # Commit Protocol
//! A commit is one observable unit: serialize the tentative cart, write it
//! to the mirror, then swap it into memory and publish it on the watch
//! channel. If any step fails, nothing is swapped and the caller sees a
//! rejection; the mirror and memory never drift apart.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::error::CartError;
use super::message::CartRequest;
use super::{notices, StoreConfig};
use crate::client::CartClient;
use crate::mirror::{MirrorError, PersistenceMirror};
use crate::model::{Cart, LineItem, ProductId};
use crate::notify::NotificationSink;
use crate::oracle::StockOracle;

/// The collaborators injected into the actor's run loop.
///
/// # Context Injection
/// Dependencies are handed to [`CartActor::run`], not to the constructor.
/// This "Late Binding" keeps construction synchronous and lets callers wire
/// the same actor to production services or to test fakes.
pub struct CartContext {
    /// Answers stock and catalog lookups; consulted fresh on every mutation.
    pub oracle: Arc<dyn StockOracle>,
    /// Durable slot the serialized cart is mirrored into on every commit.
    pub mirror: Arc<dyn PersistenceMirror>,
    /// Receives one human-readable notice per rejected operation.
    pub notifier: Arc<dyn NotificationSink>,
}

/// The actor that owns the cart.
///
/// The "Server" half of the store: it holds the receiver end of the mailbox,
/// the authoritative [`Cart`], and the watch channel snapshots are read
/// from. Create one with [`crate::store::new`] and spawn [`CartActor::run`]
/// on a task.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    published: watch::Sender<Cart>,
    storage_key: String,
}

impl CartActor {
    pub(crate) fn new(config: StoreConfig) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity);
        let (published, snapshot) = watch::channel(Cart::default());
        let actor = Self {
            receiver,
            cart: Cart::default(),
            published,
            storage_key: config.storage_key,
        };
        let client = CartClient::new(sender, snapshot);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client
    /// is dropped and the mailbox closes.
    ///
    /// Hydrates the cart from the mirror exactly once before accepting the
    /// first request; the mirror is never read again after that.
    ///
    /// A caller that abandons its response future does not disturb the
    /// store: the operation still runs to completion and the failed oneshot
    /// send is discarded.
    pub async fn run(mut self, context: CartContext) {
        self.hydrate(&context).await;
        info!(items = self.cart.len(), "Cart store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Add {
                    product_id,
                    respond_to,
                } => {
                    debug!(product_id, "Add");
                    let result = self.add(product_id, &context).await;
                    match &result {
                        Ok(()) => {
                            info!(
                                product_id,
                                quantity = self.cart.quantity_of(product_id),
                                "Added to cart"
                            );
                        }
                        Err(e) => {
                            warn!(product_id, error = %e, "Add rejected");
                            context.notifier.notify(match e {
                                CartError::OutOfStock { .. } => notices::OUT_OF_STOCK,
                                _ => notices::ADD_FAILED,
                            });
                        }
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::Remove {
                    product_id,
                    respond_to,
                } => {
                    debug!(product_id, "Remove");
                    let result = self.remove(product_id, &context).await;
                    match &result {
                        Ok(()) => info!(product_id, items = self.cart.len(), "Removed from cart"),
                        Err(e) => {
                            warn!(product_id, error = %e, "Remove rejected");
                            context.notifier.notify(notices::REMOVE_FAILED);
                        }
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::SetQuantity {
                    product_id,
                    amount,
                    respond_to,
                } => {
                    debug!(product_id, amount, "SetQuantity");
                    // Zero and negative amounts are a deliberate no-op, not
                    // an error and not a removal.
                    if amount <= 0 {
                        let _ = respond_to.send(Ok(()));
                        continue;
                    }
                    let result = self.set_quantity(product_id, amount, &context).await;
                    match &result {
                        Ok(()) => info!(product_id, quantity = amount, "Quantity set"),
                        Err(e) => {
                            warn!(product_id, amount, error = %e, "Quantity update rejected");
                            context.notifier.notify(match e {
                                CartError::OutOfStock { .. } => notices::OUT_OF_STOCK,
                                _ => notices::UPDATE_FAILED,
                            });
                        }
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(items = self.cart.len(), "Cart store stopped");
    }

    /// Restores the cart from the mirror, once, before the loop starts.
    ///
    /// An absent or malformed payload is not an error: the store starts
    /// empty and overwrites the slot on the next commit.
    async fn hydrate(&mut self, context: &CartContext) {
        match context.mirror.read(&self.storage_key).await {
            Ok(Some(payload)) => match serde_json::from_slice::<Cart>(&payload) {
                Ok(cart) => {
                    debug!(items = cart.len(), "Restored persisted cart");
                    self.published.send_replace(cart.clone());
                    self.cart = cart;
                }
                Err(e) => warn!(error = %e, "Persisted cart is malformed, starting empty"),
            },
            Ok(None) => debug!("No persisted cart, starting empty"),
            Err(e) => warn!(error = %e, "Could not read persisted cart, starting empty"),
        }
    }

    async fn add(&mut self, product_id: ProductId, context: &CartContext) -> Result<(), CartError> {
        let current = self.cart.quantity_of(product_id);
        let stock = context
            .oracle
            .stock_level(product_id)
            .await
            .map_err(|e| CartError::AdditionFailed(e.to_string()))?;
        let requested = current.saturating_add(1);
        if requested > stock.available {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.available,
            });
        }

        let mut next = self.cart.clone();
        if !next.set_quantity(product_id, requested) {
            // First insertion: this is the only path that touches the
            // catalog, so existing line items cost one lookup per add.
            let product = context
                .oracle
                .product(product_id)
                .await
                .map_err(|e| CartError::AdditionFailed(e.to_string()))?;
            next.push(LineItem::new(product, requested));
        }
        self.commit(next, context)
            .await
            .map_err(|e| CartError::AdditionFailed(e.to_string()))
    }

    async fn remove(
        &mut self,
        product_id: ProductId,
        context: &CartContext,
    ) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        if !next.remove(product_id) {
            return Err(CartError::ProductNotInCart(product_id));
        }
        self.commit(next, context)
            .await
            .map_err(|e| CartError::RemovalFailed(e.to_string()))
    }

    async fn set_quantity(
        &mut self,
        product_id: ProductId,
        amount: i64,
        context: &CartContext,
    ) -> Result<(), CartError> {
        let stock = context
            .oracle
            .stock_level(product_id)
            .await
            .map_err(|e| CartError::UpdateFailed(e.to_string()))?;
        if amount > i64::from(stock.available) {
            return Err(CartError::OutOfStock {
                product_id,
                requested: u32::try_from(amount).unwrap_or(u32::MAX),
                available: stock.available,
            });
        }
        // amount is in 1..=available here, so the conversion is lossless.
        let requested = u32::try_from(amount).unwrap_or(u32::MAX);

        if !self.cart.contains(product_id) {
            return Err(CartError::ProductNotInCart(product_id));
        }
        let mut next = self.cart.clone();
        next.set_quantity(product_id, requested);
        self.commit(next, context)
            .await
            .map_err(|e| CartError::UpdateFailed(e.to_string()))
    }

    /// Persists `next` and only then makes it the readable state.
    ///
    /// Invariant: the mirror and the in-memory cart change together. A
    /// serialization or write failure leaves the previous state in place
    /// and surfaces as the operation's failure kind.
    async fn commit(&mut self, next: Cart, context: &CartContext) -> Result<(), MirrorError> {
        let payload = serde_json::to_vec(&next)?;
        context.mirror.write(&self.storage_key, &payload).await?;
        self.published.send_replace(next.clone());
        self.cart = next;
        Ok(())
    }
}
