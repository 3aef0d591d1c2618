//! Defines `Item`, the timestamped record, and its serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single unit of stored data: one UTC timestamp, supplied by the
/// caller at construction, reassignable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub timestamp: DateTime<Utc>,
}

impl Item {
    /// Build a record holding exactly the supplied timestamp.
    /// Any value is accepted, past or future.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }

    /// Serialize to bincode bytes.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Deserialize from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
