//! # Cart Client
//!
//! Type-safe async interface to a running [`CartActor`](crate::store::CartActor).
//!
//! The client is the only way into the store: it forwards mutations over the
//! mailbox and reads snapshots from the watch channel the actor publishes
//! to. It holds only channel handles, so cloning is cheap and every clone
//! talks to the same store.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use crate::model::{Cart, ProductId};
use crate::store::{CartError, CartRequest};

/// Cheap-to-clone handle for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    snapshot: watch::Receiver<Cart>,
}

impl CartClient {
    pub(crate) fn new(sender: mpsc::Sender<CartRequest>, snapshot: watch::Receiver<Cart>) -> Self {
        Self { sender, snapshot }
    }

    /// Adds one unit of `product_id` to the cart, inserting the product at
    /// quantity one if it is not there yet.
    ///
    /// Rejected with [`CartError::OutOfStock`] when the resulting quantity
    /// would exceed the units available, and [`CartError::AdditionFailed`]
    /// when a lookup or the persistence write fails. On rejection the cart
    /// is untouched.
    #[instrument(skip(self))]
    pub async fn add(&self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Add {
                product_id,
                respond_to,
            })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)?
    }

    /// Removes the line item for `product_id` entirely, regardless of its
    /// quantity.
    ///
    /// Rejected with [`CartError::ProductNotInCart`] when the product is not
    /// in the cart.
    #[instrument(skip(self))]
    pub async fn remove(&self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Remove {
                product_id,
                respond_to,
            })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)?
    }

    /// Sets the absolute quantity of `product_id` to `amount`.
    ///
    /// An `amount` of zero or less resolves successfully without touching
    /// the cart: it is a guarded no-op, not a removal. Otherwise rejected
    /// with [`CartError::OutOfStock`], [`CartError::ProductNotInCart`] or
    /// [`CartError::UpdateFailed`] with the cart untouched.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, product_id: ProductId, amount: i64) -> Result<(), CartError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::SetQuantity {
                product_id,
                amount,
                respond_to,
            })
            .await
            .map_err(|_| CartError::StoreClosed)?;
        response.await.map_err(|_| CartError::StoreDropped)?
    }

    /// The cart as of the last commit, as an owned copy.
    ///
    /// Never blocks and never suspends; mutating the returned value has no
    /// effect on the store.
    pub fn snapshot(&self) -> Cart {
        self.snapshot.borrow().clone()
    }

    /// Subscription that observes every committed cart state.
    ///
    /// The receiver yields a change notification per commit; read the
    /// current value with `borrow_and_update`. This is how a UI layer
    /// re-renders on cart changes without polling.
    pub fn watch(&self) -> watch::Receiver<Cart> {
        self.snapshot.clone()
    }
}
