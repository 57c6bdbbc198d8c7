//! The cart store: one actor owning the line-item list.
//!
//! # Main Components
//!
//! - [`CartActor`] - The actor that owns the cart and runs the mutation protocol.
//! - [`CartContext`] - The collaborators injected into the actor's run loop.
//! - [`CartRequest`] - The mailbox message type.
//! - [`CartError`] - Why an operation was rejected.

pub mod actor;
pub mod error;
pub mod message;

pub use actor::{CartActor, CartContext};
pub use error::CartError;
pub use message::{CartRequest, Response};

use crate::client::CartClient;

/// Fixed, human-readable strings handed to the notification sink. One per
/// rejection; the store never notifies on success.
pub mod notices {
    /// The requested or resulting quantity exceeds the units available.
    pub const OUT_OF_STOCK: &str = "Requested quantity is out of stock";
    /// Adding a product failed for any reason other than the stock ceiling.
    pub const ADD_FAILED: &str = "Could not add the product";
    /// Removing a product failed.
    pub const REMOVE_FAILED: &str = "Could not remove the product";
    /// Changing a quantity failed for any reason other than the stock ceiling.
    pub const UPDATE_FAILED: &str = "Could not change the product quantity";
}

/// Tunables for a cart store instance.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Capacity of the request mailbox. Senders wait when it is full.
    pub mailbox_capacity: usize,
    /// Key the serialized cart is persisted under in the mirror.
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            storage_key: "cart".to_string(),
        }
    }
}

/// Creates a new cart actor and its client.
pub fn new(config: StoreConfig) -> (CartActor, CartClient) {
    CartActor::new(config)
}
