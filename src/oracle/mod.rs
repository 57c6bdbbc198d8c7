//! The inventory side of the cart protocol.
//!
//! The store never trusts its own idea of stock: every mutating operation
//! asks the oracle for a fresh [`StockLevel`] before committing, so purchases
//! made elsewhere are visible immediately instead of after a cache expiry.

pub mod error;
pub mod memory;
pub mod mock;

pub use error::OracleError;
pub use memory::InMemoryInventory;
pub use mock::MockOracle;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// Units the inventory can still sell for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: ProductId,
    pub available: u32,
}

/// Read-only view of the remote inventory service.
///
/// # Failure Handling
/// Implementations report failures through [`OracleError`], but the store
/// treats every failure uniformly: the operation that needed the lookup is
/// rejected and the cart is left untouched. Distinguishing an unknown
/// product from an unreachable service only matters for logging.
#[async_trait]
pub trait StockOracle: Send + Sync {
    /// How many units of `product_id` are available right now.
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, OracleError>;

    /// Catalog attributes for `product_id`.
    ///
    /// Consulted only when a product first enters the cart; quantity changes
    /// on an existing line item reuse the attributes already attached to it.
    async fn product(&self, product_id: ProductId) -> Result<Product, OracleError>;
}
