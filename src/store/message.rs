//! Mailbox messages for the cart actor.

use tokio::sync::oneshot;

use super::error::CartError;
use crate::model::ProductId;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, CartError>>;

/// Requests accepted by the cart actor's mailbox.
///
/// # Single-Flight Serialization
/// Every mutation travels through this enum and is processed to completion
/// before the next one is picked up. Nothing else can commit between a
/// mutation's stock check and its commit, which is what keeps two
/// overlapping `Add`s for the same product from both passing a stale stock
/// check and overrunning the ceiling.
///
/// Snapshot reads do not appear here: they go through a watch channel the
/// actor publishes to on every commit, so reads never wait on the mailbox.
#[derive(Debug)]
pub enum CartRequest {
    /// Increase the quantity of a product by one, inserting a new line item
    /// at quantity one if the product is not in the cart yet.
    Add {
        product_id: ProductId,
        respond_to: Response<()>,
    },
    /// Drop the product's line item entirely, whatever its quantity.
    Remove {
        product_id: ProductId,
        respond_to: Response<()>,
    },
    /// Set the absolute quantity of a product already in the cart. Zero and
    /// negative amounts are deliberately ignored, not treated as removal.
    SetQuantity {
        product_id: ProductId,
        amount: i64,
        respond_to: Response<()>,
    },
}
