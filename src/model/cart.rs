//! The cart value type: an ordered list of line items.
//!
//! `Cart` is a plain value. All the protocol rules (stock checks,
//! persistence, notifications) live in the store; the methods here only
//! guarantee the structural invariants: one line item per product, and
//! insertion order preserved across quantity changes.

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// One product entry in the cart together with its purchased quantity.
///
/// A line item never exists with a quantity of zero; removing the last unit
/// of a product is expressed by removing the whole item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

/// Ordered sequence of line items, first-insertion order.
///
/// Cloning is how snapshots are made: callers always receive an owned copy,
/// so mutating a snapshot can never bypass the store's commit protocol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|item| item.product_id() == product_id)
    }

    /// Quantity currently in the cart for `product_id`, zero if absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Appends a new line item at the end of the cart.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Sets the quantity of an existing line item in place, keeping its
    /// position. Returns `false` if the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
        {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes the line item for `product_id` regardless of its quantity.
    /// Returns `false` if the product is not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        match self
            .items
            .iter()
            .position(|item| item.product_id() == product_id)
        {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId) -> Product {
        Product::new(id, format!("Product {id}"), 10.0, "product.png")
    }

    #[test]
    fn preserves_first_insertion_order() {
        let mut cart = Cart::new();
        cart.push(LineItem::new(product(3), 1));
        cart.push(LineItem::new(product(1), 1));
        cart.push(LineItem::new(product(2), 1));

        cart.set_quantity(3, 5);
        cart.remove(1);

        let ids: Vec<ProductId> = cart.items().iter().map(LineItem::product_id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(cart.quantity_of(3), 5);
    }

    #[test]
    fn mutators_report_absent_products() {
        let mut cart = Cart::new();
        cart.push(LineItem::new(product(1), 2));

        assert!(!cart.set_quantity(99, 4));
        assert!(!cart.remove(99));
        assert_eq!(cart.quantity_of(99), 0);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn serialized_cart_round_trips() {
        let mut cart = Cart::new();
        cart.push(LineItem::new(product(7), 2));
        cart.push(LineItem::new(product(9), 1));

        let payload = serde_json::to_vec(&cart).unwrap();
        let restored: Cart = serde_json::from_slice(&payload).unwrap();
        assert_eq!(restored, cart);
    }
}
