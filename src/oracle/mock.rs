//! # Mock Oracle
//!
//! Expectation-based [`StockOracle`] for testing the store in isolation.
//!
//! Queue up expectations with [`MockOracle::expect_stock`] and
//! [`MockOracle::expect_product`], run the store against a clone, then call
//! [`MockOracle::verify`] to assert every expectation was consumed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{OracleError, StockLevel, StockOracle};
use crate::model::{Product, ProductId};

enum Expectation {
    Stock {
        product_id: ProductId,
        response: Result<StockLevel, OracleError>,
    },
    Product {
        product_id: ProductId,
        response: Result<Product, OracleError>,
    },
}

/// A scripted inventory service with expectation tracking.
///
/// # Example
/// ```ignore
/// let oracle = MockOracle::new();
/// oracle.expect_stock(1).return_ok(5);
/// oracle.expect_product(1).return_ok(product);
///
/// // Drive the store against oracle.clone()...
/// oracle.verify(); // Ensures all expectations were met
/// ```
///
/// Lookups are matched against the queue in FIFO order. A lookup that
/// arrives with no queued expectation, or for a different product than
/// expected, panics the calling task: the test scripted the wrong sequence.
#[derive(Clone)]
pub struct MockOracle {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockOracle {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Expects a stock-level lookup for `product_id`.
    pub fn expect_stock(&self, product_id: ProductId) -> StockExpectation {
        StockExpectation {
            product_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a catalog lookup for `product_id`.
    pub fn expect_product(&self, product_id: ProductId) -> ProductExpectation {
        ProductExpectation {
            product_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let expectations = self.expectations.lock().unwrap();
        if !expectations.is_empty() {
            panic!(
                "Not all oracle expectations were met. {} remaining",
                expectations.len()
            );
        }
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for stock-level expectations.
pub struct StockExpectation {
    product_id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl StockExpectation {
    /// The lookup succeeds with `available` units.
    pub fn return_ok(self, available: u32) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::Stock {
            product_id: self.product_id,
            response: Ok(StockLevel {
                product_id: self.product_id,
                available,
            }),
        });
    }

    /// The lookup fails.
    pub fn return_err(self, error: OracleError) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::Stock {
            product_id: self.product_id,
            response: Err(error),
        });
    }
}

/// Builder for catalog-lookup expectations.
pub struct ProductExpectation {
    product_id: ProductId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ProductExpectation {
    /// The lookup succeeds with the given catalog record.
    pub fn return_ok(self, product: Product) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::Product {
            product_id: self.product_id,
            response: Ok(product),
        });
    }

    /// The lookup fails.
    pub fn return_err(self, error: OracleError) {
        let mut expectations = self.expectations.lock().unwrap();
        expectations.push_back(Expectation::Product {
            product_id: self.product_id,
            response: Err(error),
        });
    }
}

#[async_trait]
impl StockOracle for MockOracle {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, OracleError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation::Stock {
                product_id: expected,
                response,
            }) if expected == product_id => response,
            _ => panic!("Unexpected stock lookup for product {product_id}"),
        }
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, OracleError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation::Product {
                product_id: expected,
                response,
            }) if expected == product_id => response,
            _ => panic!("Unexpected catalog lookup for product {product_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_expectations_in_order() {
        let oracle = MockOracle::new();
        oracle.expect_stock(1).return_ok(3);
        oracle
            .expect_product(1)
            .return_ok(Product::new(1, "Widget", 9.5, "widget.png"));
        oracle
            .expect_stock(1)
            .return_err(OracleError::Unavailable("down".to_string()));

        assert_eq!(oracle.stock_level(1).await.unwrap().available, 3);
        assert_eq!(oracle.product(1).await.unwrap().title, "Widget");
        assert!(oracle.stock_level(1).await.is_err());
        oracle.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all oracle expectations were met")]
    async fn verify_panics_on_unconsumed_expectations() {
        let oracle = MockOracle::new();
        oracle.expect_stock(1).return_ok(3);
        oracle.verify();
    }
}
