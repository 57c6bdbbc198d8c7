//! In-memory mirror for tests and demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{MirrorError, PersistenceMirror};

/// Mirror backed by a shared map.
///
/// Cloning yields a handle to the same slots, so a test can hand one clone
/// to a store and inspect the persisted payload through another, or start
/// a second store against the same clone to simulate a reload.
#[derive(Clone)]
pub struct InMemoryMirror {
    slots: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryMirror {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Payload currently stored under `key`, if any.
    pub fn payload(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    /// Seeds the slot under `key`, bypassing the trait. Lets tests start a
    /// store against a pre-existing or deliberately corrupt payload.
    pub fn seed(&self, key: &str, payload: impl Into<Vec<u8>>) {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.into());
    }

    /// Makes every subsequent write fail until turned off again.
    pub fn fail_writes(&self, enabled: bool) {
        self.fail_writes.store(enabled, Ordering::SeqCst);
    }
}

impl Default for InMemoryMirror {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceMirror for InMemoryMirror {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, MirrorError> {
        Ok(self.slots.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), MirrorError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MirrorError::Backend("injected write failure".to_string()));
        }
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_vec());
        Ok(())
    }
}
