//! Vote-fact storage trait.
//!
//! A vote is the fact "(voter, election) cast a ballot", recorded once and
//! never mutated. Which candidate received it lives only in the candidate
//! tally; the fact store exists to enforce one vote per voter per election.

use crate::StoreError;
use agora_types::{ElectionId, RegNo, Timestamp};
use serde::{Deserialize, Serialize};

/// The fact that a voter has cast a ballot in an election.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter: RegNo,
    pub election: ElectionId,
    pub cast_at: Timestamp,
}

/// Trait for vote-fact storage operations.
pub trait VoteStore {
    /// Insert a vote fact if and only if none exists for the
    /// `(voter, election)` pair. Returns `StoreError::Duplicate` on
    /// conflict. This is the unique-constraint equivalent the tally engine
    /// relies on: under concurrent casts for the same pair, exactly one
    /// insert succeeds.
    fn insert_vote(&self, vote: &VoteRecord) -> Result<(), StoreError>;

    /// Whether a vote fact exists for the pair. Advisory — never a
    /// substitute for the conflict check inside [`insert_vote`].
    ///
    /// [`insert_vote`]: VoteStore::insert_vote
    fn has_vote(&self, voter: &RegNo, election: ElectionId) -> Result<bool, StoreError>;

    /// Number of vote facts recorded for an election.
    fn vote_count(&self, election: ElectionId) -> Result<u64, StoreError>;

    /// Remove every vote fact belonging to an election. Returns how many
    /// records were removed.
    fn remove_votes_of(&self, election: ElectionId) -> Result<u64, StoreError>;
}
