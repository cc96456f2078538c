//! Candidate storage trait.

use crate::StoreError;
use agora_types::{CandidateId, ElectionId, RegNo};
use serde::{Deserialize, Serialize};

/// A user's candidacy within one election, with its running tally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub election: ElectionId,
    pub holder: RegNo,
    pub manifesto: String,
    /// Running vote tally. Mutated only via [`CandidateStore::increment_tally`].
    pub votes: u64,
}

/// Fields for a candidacy about to be created; the store assigns the id and
/// initializes the tally to zero.
#[derive(Clone, Debug)]
pub struct NewCandidate {
    pub election: ElectionId,
    pub holder: RegNo,
    pub manifesto: String,
}

/// Trait for candidate storage operations.
pub trait CandidateStore {
    fn get_candidate(&self, id: CandidateId) -> Result<CandidateRecord, StoreError>;

    /// Insert a new candidacy with a zero tally, allocating a fresh id.
    fn insert_candidate(&self, new: &NewCandidate) -> Result<CandidateRecord, StoreError>;

    fn candidates_of(&self, election: ElectionId) -> Result<Vec<CandidateRecord>, StoreError>;

    /// Atomically add one vote to a candidate's tally (read-increment-write
    /// under the backend's write serialization). Returns the new tally.
    fn increment_tally(&self, id: CandidateId) -> Result<u64, StoreError>;

    fn remove_candidate(&self, id: CandidateId) -> Result<(), StoreError>;

    /// Remove every candidacy belonging to an election. Returns how many
    /// records were removed.
    fn remove_candidates_of(&self, election: ElectionId) -> Result<u64, StoreError>;
}
