use agora_store::StoreError;
use agora_types::{CandidateId, ClubId, ElectionId, ElectionStatus, RegNo};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("election {election} is not open for voting (status: {status})")]
    ElectionNotOpen {
        election: ElectionId,
        status: ElectionStatus,
    },

    #[error("voter {voter} has already voted in election {election}")]
    DuplicateVote {
        voter: RegNo,
        election: ElectionId,
    },

    #[error("candidate {candidate} does not belong to election {election}")]
    UnknownCandidate {
        candidate: CandidateId,
        election: ElectionId,
    },

    #[error("user {holder} is already a candidate in election {election}")]
    DuplicateCandidacy {
        holder: RegNo,
        election: ElectionId,
    },

    #[error("actor {0} lacks authority over club {1}")]
    Unauthorized(RegNo, ClubId),

    #[error("{0} not found")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
