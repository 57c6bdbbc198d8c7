use serde::{Deserialize, Serialize};

/// Identifier the catalog assigns to a product.
pub type ProductId = u64;

/// Catalog record for a purchasable product.
///
/// Fetched from the inventory service's product lookup when a product first
/// enters the cart and carried on the line item from then on. The cart never
/// interprets these fields; they round-trip through persistence unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}
