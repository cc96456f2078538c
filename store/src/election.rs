//! Election storage trait.

use crate::StoreError;
use agora_types::{ClubId, ElectionId, ElectionStatus, PositionId, RegNo, Timestamp};
use serde::{Deserialize, Serialize};

/// An election for one club position with a bounded time window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionRecord {
    pub id: ElectionId,
    pub club: ClubId,
    pub position: PositionId,
    pub created_by: RegNo,
    pub start: Timestamp,
    pub end: Timestamp,
    pub status: ElectionStatus,
    pub created_at: Timestamp,
}

/// Fields for an election about to be created; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewElection {
    pub club: ClubId,
    pub position: PositionId,
    pub created_by: RegNo,
    pub start: Timestamp,
    pub end: Timestamp,
    pub status: ElectionStatus,
    pub created_at: Timestamp,
}

/// Trait for election storage operations.
pub trait ElectionStore {
    fn get_election(&self, id: ElectionId) -> Result<ElectionRecord, StoreError>;

    /// Insert a new election, allocating a fresh id.
    fn insert_election(&self, new: &NewElection) -> Result<ElectionRecord, StoreError>;

    /// Overwrite the stored status of an election.
    fn set_election_status(
        &self,
        id: ElectionId,
        status: ElectionStatus,
    ) -> Result<(), StoreError>;

    /// Remove the election record only. Cascading removal of candidates and
    /// votes is coordinated by [`Directory::delete_election_cascade`].
    ///
    /// [`Directory::delete_election_cascade`]: crate::Directory::delete_election_cascade
    fn remove_election(&self, id: ElectionId) -> Result<(), StoreError>;

    fn iter_elections(&self) -> Result<Vec<ElectionRecord>, StoreError>;

    fn election_count(&self) -> Result<u64, StoreError>;

    fn elections_of_club(&self, club: ClubId) -> Result<Vec<ElectionRecord>, StoreError> {
        Ok(self
            .iter_elections()?
            .into_iter()
            .filter(|e| e.club == club)
            .collect())
    }

    fn elections_with_status(
        &self,
        status: ElectionStatus,
    ) -> Result<Vec<ElectionRecord>, StoreError> {
        Ok(self
            .iter_elections()?
            .into_iter()
            .filter(|e| e.status == status)
            .collect())
    }
}
