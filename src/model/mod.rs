//! Pure data structures owned by the cart store.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
