//! In-memory table of records behind a cloneable handle.

use std::sync::{Arc, Mutex};

use super::{ItemStore, StoreError};
use crate::item::Item;

/// Public handle to the table. Clones share the same rows.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Vec<Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> Result<std::sync::MutexGuard<'_, Vec<Item>>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl ItemStore for MemoryStore {
    fn insert(&mut self, item: Item) -> Result<(), StoreError> {
        self.rows()?.push(item);
        Ok(())
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.rows()?.clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.rows()?.len())
    }
}
