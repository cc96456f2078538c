//! Position catalog storage trait.

use crate::StoreError;
use agora_types::PositionId;
use serde::{Deserialize, Serialize};

/// A position elections can be held for (e.g. "President", "Treasurer").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PositionRecord {
    pub id: PositionId,
    pub name: String,
}

/// Fields for a position about to be created; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewPosition {
    pub name: String,
}

/// Trait for position catalog operations.
pub trait PositionStore {
    fn get_position(&self, id: PositionId) -> Result<PositionRecord, StoreError>;

    /// Insert a new position, allocating a fresh id.
    fn insert_position(&self, new: &NewPosition) -> Result<PositionRecord, StoreError>;

    fn iter_positions(&self) -> Result<Vec<PositionRecord>, StoreError>;
}
