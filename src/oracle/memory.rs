//! In-memory inventory for demos and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{OracleError, StockLevel, StockOracle};
use crate::model::{Product, ProductId};

struct Entry {
    product: Product,
    available: u32,
}

/// Inventory backed by a shared map, usable wherever the real service would
/// be injected.
///
/// Cloning yields a handle to the same inventory, so a test can restock or
/// drain a product while a store is running against it.
#[derive(Clone)]
pub struct InMemoryInventory {
    entries: Arc<Mutex<HashMap<ProductId, Entry>>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers a product and the units available for it.
    pub fn stock(&self, product: Product, available: u32) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(product.id, Entry { product, available });
    }

    /// Adjusts the available units of an already registered product.
    pub fn set_available(&self, product_id: ProductId, available: u32) {
        if let Some(entry) = self.entries.lock().unwrap().get_mut(&product_id) {
            entry.available = available;
        }
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StockOracle for InMemoryInventory {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, OracleError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| OracleError::Unavailable("inventory lock poisoned".to_string()))?;
        let entry = entries
            .get(&product_id)
            .ok_or(OracleError::UnknownProduct(product_id))?;
        Ok(StockLevel {
            product_id,
            available: entry.available,
        })
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, OracleError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| OracleError::Unavailable("inventory lock poisoned".to_string()))?;
        entries
            .get(&product_id)
            .map(|entry| entry.product.clone())
            .ok_or(OracleError::UnknownProduct(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_registered_stock_and_unknown_products() {
        let inventory = InMemoryInventory::new();
        inventory.stock(Product::new(1, "Widget", 9.5, "widget.png"), 4);

        let level = inventory.stock_level(1).await.unwrap();
        assert_eq!(level.available, 4);

        inventory.set_available(1, 0);
        let level = inventory.stock_level(1).await.unwrap();
        assert_eq!(level.available, 0);

        assert_eq!(
            inventory.stock_level(2).await,
            Err(OracleError::UnknownProduct(2))
        );
    }
}
