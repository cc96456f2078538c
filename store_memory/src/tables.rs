//! The record tables held behind the store's lock.

use agora_store::{
    CandidateRecord, ClubRecord, ElectionRecord, MembershipRecord, PositionRecord, SessionRecord,
    UserRecord, VoteRecord,
};
use agora_types::{CandidateId, ClubId, ElectionId, MembershipId, PositionId, RegNo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All tables, keyed for deterministic iteration order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Tables {
    pub users: BTreeMap<RegNo, UserRecord>,
    pub clubs: BTreeMap<ClubId, ClubRecord>,
    pub positions: BTreeMap<PositionId, PositionRecord>,
    pub memberships: BTreeMap<MembershipId, MembershipRecord>,
    /// Secondary index enforcing one membership record per (user, club).
    pub membership_index: BTreeMap<(RegNo, ClubId), MembershipId>,
    pub elections: BTreeMap<ElectionId, ElectionRecord>,
    pub candidates: BTreeMap<CandidateId, CandidateRecord>,
    /// Vote facts keyed by (voter, election) — the unique constraint itself.
    pub votes: BTreeMap<(RegNo, ElectionId), VoteRecord>,
    pub sessions: BTreeMap<String, SessionRecord>,

    next_club_id: u64,
    next_position_id: u64,
    next_membership_id: u64,
    next_election_id: u64,
    next_candidate_id: u64,
}

impl Tables {
    pub fn alloc_club_id(&mut self) -> ClubId {
        self.next_club_id += 1;
        ClubId::new(self.next_club_id)
    }

    pub fn alloc_position_id(&mut self) -> PositionId {
        self.next_position_id += 1;
        PositionId::new(self.next_position_id)
    }

    pub fn alloc_membership_id(&mut self) -> MembershipId {
        self.next_membership_id += 1;
        MembershipId::new(self.next_membership_id)
    }

    pub fn alloc_election_id(&mut self) -> ElectionId {
        self.next_election_id += 1;
        ElectionId::new(self.next_election_id)
    }

    pub fn alloc_candidate_id(&mut self) -> CandidateId {
        self.next_candidate_id += 1;
        CandidateId::new(self.next_candidate_id)
    }
}
