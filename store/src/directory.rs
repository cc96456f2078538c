//! Unified Directory trait — a coherent abstraction over all record stores.
//!
//! Provides accessor methods for the individual storage components and
//! higher-level operations that coordinate across them.

use crate::candidate::CandidateStore;
use crate::club::ClubStore;
use crate::election::ElectionStore;
use crate::membership::MembershipStore;
use crate::position::PositionStore;
use crate::session::SessionStore;
use crate::user::UserStore;
use crate::vote::VoteStore;
use crate::StoreError;
use agora_types::{ClubId, ElectionId, RegNo};

/// Unified storage interface providing access to every record family.
///
/// Implementors expose the individual stores; higher-level operations
/// coordinate across them.
pub trait Directory {
    type Users: UserStore;
    type Clubs: ClubStore;
    type Positions: PositionStore;
    type Memberships: MembershipStore;
    type Elections: ElectionStore;
    type Candidates: CandidateStore;
    type Votes: VoteStore;
    type Sessions: SessionStore;

    fn user_store(&self) -> &Self::Users;
    fn club_store(&self) -> &Self::Clubs;
    fn position_store(&self) -> &Self::Positions;
    fn membership_store(&self) -> &Self::Memberships;
    fn election_store(&self) -> &Self::Elections;
    fn candidate_store(&self) -> &Self::Candidates;
    fn vote_store(&self) -> &Self::Votes;
    fn session_store(&self) -> &Self::Sessions;

    /// Whether `user` is the head of `club`.
    fn is_head_of(&self, user: &RegNo, club: ClubId) -> Result<bool, StoreError> {
        Ok(self.club_store().get_club(club)?.head == *user)
    }

    /// Remove an election together with its candidates and vote facts.
    /// Irreversible.
    fn delete_election_cascade(&self, id: ElectionId) -> Result<CascadeSummary, StoreError> {
        let votes = self.vote_store().remove_votes_of(id)?;
        let candidates = self.candidate_store().remove_candidates_of(id)?;
        self.election_store().remove_election(id)?;
        Ok(CascadeSummary { candidates, votes })
    }
}

/// What a cascading election delete removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeSummary {
    pub candidates: u64,
    pub votes: u64,
}
