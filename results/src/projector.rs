//! The projection itself.

use agora_store::{CandidateRecord, ElectionRecord};
use agora_types::{CandidateId, ElectionId, ElectionStatus, RegNo};
use serde::{Deserialize, Serialize};

/// One candidate in the ranked results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: CandidateId,
    pub holder: RegNo,
    pub votes: u64,
    /// Integer percentage of the total, rounded half-up. 0 when no votes
    /// have been cast at all.
    pub percent: u32,
}

/// A snapshot of an election's derived results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionResults {
    pub election: ElectionId,
    pub status: ElectionStatus,
    pub total_votes: u64,
    /// Descending by vote count; ties broken by ascending candidate id so
    /// the ranking is reproducible.
    pub ranking: Vec<RankedCandidate>,
    /// Declared only for a completed election with at least one vote.
    pub winner: Option<CandidateId>,
    /// Top tally minus second place; the top tally itself with a single
    /// candidate, 0 with none.
    pub margin: u64,
}

/// Integer percentage of `votes` out of `total`, rounded half-up.
pub fn percentage(votes: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    // Round-half-up without floats: floor((200*v + t) / (2*t)).
    ((200 * votes + total) / (2 * total)) as u32
}

/// Derive ranked results from an election and its candidates.
pub fn project(election: &ElectionRecord, candidates: &[CandidateRecord]) -> ElectionResults {
    let total_votes: u64 = candidates.iter().map(|c| c.votes).sum();

    let mut ordered: Vec<&CandidateRecord> = candidates.iter().collect();
    ordered.sort_by_key(|c| (std::cmp::Reverse(c.votes), c.id));

    let ranking: Vec<RankedCandidate> = ordered
        .iter()
        .map(|c| RankedCandidate {
            candidate: c.id,
            holder: c.holder.clone(),
            votes: c.votes,
            percent: percentage(c.votes, total_votes),
        })
        .collect();

    let winner = match (election.status, ranking.first()) {
        (ElectionStatus::Completed, Some(top)) if total_votes > 0 => Some(top.candidate),
        _ => None,
    };

    let margin = match ordered.as_slice() {
        [] => 0,
        [only] => only.votes,
        [top, second, ..] => top.votes - second.votes,
    };

    ElectionResults {
        election: election.id,
        status: election.status,
        total_votes,
        ranking,
        winner,
        margin,
    }
}
