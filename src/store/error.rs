//! Error types for cart operations.

use thiserror::Error;

use crate::model::ProductId;

/// Why a cart operation was rejected.
///
/// Every rejection leaves the cart and its persisted mirror exactly as they
/// were; the caller only learns that the cart did not change and why.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested or resulting quantity exceeds the units available.
    #[error("Out of stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The targeted product has no line item in the cart.
    #[error("Product not in cart: {0}")]
    ProductNotInCart(ProductId),

    /// An upstream lookup or the persistence write failed while adding.
    #[error("Addition failed: {0}")]
    AdditionFailed(String),

    /// The persistence write failed while removing.
    #[error("Removal failed: {0}")]
    RemovalFailed(String),

    /// An upstream lookup or the persistence write failed while updating.
    #[error("Quantity update failed: {0}")]
    UpdateFailed(String),

    /// The store task is no longer running.
    #[error("Cart store closed")]
    StoreClosed,

    /// The store dropped the response channel.
    #[error("Cart store dropped response channel")]
    StoreDropped,
}
