//! Error types for inventory lookups.

use thiserror::Error;

use crate::model::ProductId;

/// Errors an inventory lookup can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OracleError {
    /// The catalog has no product with this id.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The inventory service could not be reached or answered garbage.
    #[error("Inventory service unavailable: {0}")]
    Unavailable(String),
}
