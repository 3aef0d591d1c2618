//! Store collaborators for `Item`: an in-memory table and an
//! append-only file store. Records are added and enumerated,
//! nothing more.

pub mod disk;
pub mod memory;

#[cfg(test)]
mod tests;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use crate::item::Item;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Repository seam between the record type and whatever holds it.
pub trait ItemStore {
    /// Add a record to the store.
    fn insert(&mut self, item: Item) -> Result<(), StoreError>;

    /// Snapshot of the stored records, in insertion order.
    fn items(&self) -> Result<Vec<Item>, StoreError>;

    /// Number of stored records.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
