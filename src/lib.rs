//! Chatty application skeleton: a timestamped record (`Item`) and the
//! stores that hold collections of it.

pub mod item;
pub mod store;

pub use item::Item;
pub use store::{DiskStore, ItemStore, MemoryStore};
