//! Durable storage for the serialized cart.
//!
//! A mirror is a single key-value slot with no structure of its own: the
//! store hands it an opaque payload after every commit and reads it back
//! exactly once, at startup. Memory is the source of truth from then on.

pub mod error;
pub mod file;
pub mod memory;

pub use error::MirrorError;
pub use file::JsonFileMirror;
pub use memory::InMemoryMirror;

use async_trait::async_trait;

/// Durable key-value slot that outlives the process.
///
/// Injected into the store rather than reached for as a global, so tests can
/// substitute an in-memory fake and a browser-style local store, a file, or
/// a real database can all sit behind the same seam.
#[async_trait]
pub trait PersistenceMirror: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if the slot was
    /// never written.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, MirrorError>;

    /// Overwrites the slot under `key` with the full payload. Not a delta:
    /// every write replaces whatever was there.
    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), MirrorError>;
}
