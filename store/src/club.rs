//! Club storage trait.

use crate::StoreError;
use agora_types::{ClubId, RegNo};
use serde::{Deserialize, Serialize};

/// A club in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClubRecord {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// The user with administrative authority over this club.
    pub head: RegNo,
}

/// Fields for a club about to be created; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub category: String,
    pub head: RegNo,
}

/// Trait for club storage operations.
pub trait ClubStore {
    fn get_club(&self, id: ClubId) -> Result<ClubRecord, StoreError>;

    /// Insert a new club, allocating a fresh id.
    fn insert_club(&self, new: &NewClub) -> Result<ClubRecord, StoreError>;

    /// Replace the head of an existing club.
    fn set_club_head(&self, id: ClubId, head: &RegNo) -> Result<(), StoreError>;

    fn iter_clubs(&self) -> Result<Vec<ClubRecord>, StoreError>;
}
