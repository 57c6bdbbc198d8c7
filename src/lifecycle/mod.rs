//! Orchestration: wiring the actor to its collaborators and managing its
//! lifetime.

pub mod cart_system;
pub mod tracing;

pub use cart_system::CartSystem;
pub use tracing::setup_tracing;
