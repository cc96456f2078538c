//! The vote tally engine.

use crate::TallyError;
use agora_store::{
    CandidateRecord, CandidateStore, Directory, ElectionStore, NewCandidate, StoreError,
    VoteRecord, VoteStore,
};
use agora_types::{Actor, CandidateId, ElectionId, RegNo, Timestamp};
use std::sync::Arc;
use tracing::{debug, info};

/// Engine owning candidate records and vote casting.
pub struct TallyEngine<D> {
    directory: Arc<D>,
}

fn found<T>(res: Result<T, StoreError>) -> Result<T, TallyError> {
    res.map_err(|e| match e {
        StoreError::NotFound(what) => TallyError::NotFound(what),
        other => TallyError::Store(other),
    })
}

impl<D: Directory> TallyEngine<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Register a user as a candidate in an election with a zero tally.
    ///
    /// Fails with `NotFound` for a missing election and `DuplicateCandidacy`
    /// if the holder already stands in it.
    pub fn register_candidate(
        &self,
        election: ElectionId,
        holder: &RegNo,
        manifesto: impl Into<String>,
    ) -> Result<CandidateRecord, TallyError> {
        let d = &*self.directory;
        found(d.election_store().get_election(election))?;

        let record = d
            .candidate_store()
            .insert_candidate(&NewCandidate {
                election,
                holder: holder.clone(),
                manifesto: manifesto.into(),
            })
            .map_err(|e| match e {
                StoreError::Duplicate(_) => TallyError::DuplicateCandidacy {
                    holder: holder.clone(),
                    election,
                },
                other => TallyError::Store(other),
            })?;
        info!(candidate = %record.id, %election, %holder, "candidate registered");
        Ok(record)
    }

    /// Cast a vote. The check order is part of the contract:
    ///
    /// 1. the election must be `ongoing`;
    /// 2. the voter must not already hold a vote fact for this election;
    /// 3. the candidate must belong to this election;
    /// 4. record the fact and increment the tally by exactly one.
    ///
    /// Step 4 re-validates the duplicate check atomically inside the store,
    /// so two concurrent casts by the same voter admit exactly one.
    pub fn cast_vote(
        &self,
        election: ElectionId,
        voter: &RegNo,
        candidate: CandidateId,
        now: Timestamp,
    ) -> Result<(), TallyError> {
        let d = &*self.directory;

        let record = found(d.election_store().get_election(election))?;
        if !record.status.accepts_votes() {
            return Err(TallyError::ElectionNotOpen {
                election,
                status: record.status,
            });
        }

        if d.vote_store().has_vote(voter, election)? {
            return Err(TallyError::DuplicateVote {
                voter: voter.clone(),
                election,
            });
        }

        let belongs = match d.candidate_store().get_candidate(candidate) {
            Ok(c) => c.election == election,
            Err(StoreError::NotFound(_)) => false,
            Err(e) => return Err(TallyError::Store(e)),
        };
        if !belongs {
            return Err(TallyError::UnknownCandidate {
                candidate,
                election,
            });
        }

        d.vote_store()
            .insert_vote(&VoteRecord {
                voter: voter.clone(),
                election,
                cast_at: now,
            })
            .map_err(|e| match e {
                // Lost the race against a concurrent cast by the same voter.
                StoreError::Duplicate(_) => TallyError::DuplicateVote {
                    voter: voter.clone(),
                    election,
                },
                other => TallyError::Store(other),
            })?;
        let tally = d.candidate_store().increment_tally(candidate)?;
        debug!(%election, %candidate, tally, "vote recorded");
        Ok(())
    }

    /// Whether a vote fact exists for the pair. Advisory for clients; never
    /// a substitute for the duplicate check inside [`cast_vote`].
    ///
    /// [`cast_vote`]: TallyEngine::cast_vote
    pub fn has_voted(&self, voter: &RegNo, election: ElectionId) -> Result<bool, TallyError> {
        Ok(self.directory.vote_store().has_vote(voter, election)?)
    }

    /// All candidates of an election with current tallies, unordered.
    /// Ranking is the results projector's job.
    pub fn list_candidates(
        &self,
        election: ElectionId,
    ) -> Result<Vec<CandidateRecord>, TallyError> {
        Ok(self.directory.candidate_store().candidates_of(election)?)
    }

    /// Remove a candidacy. Only an admin or the head of the election's club
    /// may withdraw a candidate; already-cast vote facts stay recorded.
    pub fn withdraw_candidate(
        &self,
        candidate: CandidateId,
        actor: &Actor,
    ) -> Result<(), TallyError> {
        let d = &*self.directory;
        let record = found(d.candidate_store().get_candidate(candidate))?;
        let election = found(d.election_store().get_election(record.election))?;
        if !actor.is_admin() && !d.is_head_of(&actor.reg_no, election.club)? {
            return Err(TallyError::Unauthorized(
                actor.reg_no.clone(),
                election.club,
            ));
        }
        d.candidate_store().remove_candidate(candidate)?;
        info!(%candidate, election = %record.election, by = %actor.reg_no, "candidate withdrawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_store::{
        ClubStore, NewClub, NewElection, NewPosition, PositionStore, UserRecord, UserStore,
    };
    use agora_store_memory::MemoryStore;
    use agora_types::{ElectionStatus, SiteRole};

    struct Fixture {
        engine: TallyEngine<MemoryStore>,
        store: Arc<MemoryStore>,
        election: ElectionId,
    }

    fn setup(status: ElectionStatus) -> Fixture {
        let store = Arc::new(MemoryStore::new());
        store
            .put_user(&UserRecord {
                reg_no: RegNo::from("HEAD1"),
                name: "Head".to_string(),
                password_hash: "$argon2id$x".to_string(),
                role: SiteRole::Head,
            })
            .unwrap();
        let club = store
            .insert_club(&NewClub {
                name: "Chess".to_string(),
                description: String::new(),
                category: "Games".to_string(),
                head: RegNo::from("HEAD1"),
            })
            .unwrap();
        let position = store
            .insert_position(&NewPosition {
                name: "President".to_string(),
            })
            .unwrap();
        let election = store
            .insert_election(&NewElection {
                club: club.id,
                position: position.id,
                created_by: RegNo::from("HEAD1"),
                start: Timestamp::new(1_000),
                end: Timestamp::new(2_000),
                status,
                created_at: Timestamp::new(500),
            })
            .unwrap();
        Fixture {
            engine: TallyEngine::new(store.clone()),
            store,
            election: election.id,
        }
    }

    fn tallies(f: &Fixture) -> Vec<u64> {
        let mut candidates = f.engine.list_candidates(f.election).unwrap();
        candidates.sort_by_key(|c| c.id);
        candidates.into_iter().map(|c| c.votes).collect()
    }

    #[test]
    fn vote_only_while_ongoing() {
        for status in [ElectionStatus::Upcoming, ElectionStatus::Completed] {
            let f = setup(status);
            let c = f
                .engine
                .register_candidate(f.election, &RegNo::from("CAND"), "m")
                .unwrap();
            assert!(matches!(
                f.engine
                    .cast_vote(f.election, &RegNo::from("V1"), c.id, Timestamp::new(1_500)),
                Err(TallyError::ElectionNotOpen { .. })
            ));
        }
    }

    #[test]
    fn second_vote_by_same_voter_rejected() {
        let f = setup(ElectionStatus::Ongoing);
        let c1 = f
            .engine
            .register_candidate(f.election, &RegNo::from("C1"), "one")
            .unwrap();
        let c2 = f
            .engine
            .register_candidate(f.election, &RegNo::from("C2"), "two")
            .unwrap();

        f.engine
            .cast_vote(f.election, &RegNo::from("V1"), c1.id, Timestamp::new(1_500))
            .unwrap();
        assert_eq!(tallies(&f), vec![1, 0]);

        // Voting again, even for a different candidate, is rejected and
        // the tallies do not move.
        assert!(matches!(
            f.engine
                .cast_vote(f.election, &RegNo::from("V1"), c2.id, Timestamp::new(1_600)),
            Err(TallyError::DuplicateVote { .. })
        ));
        assert_eq!(tallies(&f), vec![1, 0]);
        assert!(f
            .engine
            .has_voted(&RegNo::from("V1"), f.election)
            .unwrap());
    }

    #[test]
    fn unknown_candidate_rejected() {
        let f = setup(ElectionStatus::Ongoing);
        // Candidate of a different election in the same store.
        let other = f
            .store
            .insert_election(&NewElection {
                club: agora_types::ClubId::new(1),
                position: agora_types::PositionId::new(1),
                created_by: RegNo::from("HEAD1"),
                start: Timestamp::new(1_000),
                end: Timestamp::new(2_000),
                status: ElectionStatus::Ongoing,
                created_at: Timestamp::new(500),
            })
            .unwrap();
        let foreign = f
            .engine
            .register_candidate(other.id, &RegNo::from("C9"), "m")
            .unwrap();

        assert!(matches!(
            f.engine.cast_vote(
                f.election,
                &RegNo::from("V1"),
                CandidateId::new(999),
                Timestamp::new(1_500)
            ),
            Err(TallyError::UnknownCandidate { .. })
        ));
        assert!(matches!(
            f.engine
                .cast_vote(f.election, &RegNo::from("V1"), foreign.id, Timestamp::new(1_500)),
            Err(TallyError::UnknownCandidate { .. })
        ));
        // The failed attempts left no vote fact behind.
        assert!(!f.engine.has_voted(&RegNo::from("V1"), f.election).unwrap());
    }

    #[test]
    fn duplicate_candidacy_rejected() {
        let f = setup(ElectionStatus::Ongoing);
        f.engine
            .register_candidate(f.election, &RegNo::from("C1"), "first")
            .unwrap();
        assert!(matches!(
            f.engine
                .register_candidate(f.election, &RegNo::from("C1"), "again"),
            Err(TallyError::DuplicateCandidacy { .. })
        ));
    }

    #[test]
    fn register_in_missing_election_is_not_found() {
        let f = setup(ElectionStatus::Ongoing);
        assert!(matches!(
            f.engine
                .register_candidate(ElectionId::new(99), &RegNo::from("C1"), "m"),
            Err(TallyError::NotFound(_))
        ));
    }

    #[test]
    fn withdraw_requires_authority() {
        let f = setup(ElectionStatus::Ongoing);
        let c = f
            .engine
            .register_candidate(f.election, &RegNo::from("C1"), "m")
            .unwrap();
        let outsider = Actor::new("V1", SiteRole::User);
        assert!(matches!(
            f.engine.withdraw_candidate(c.id, &outsider),
            Err(TallyError::Unauthorized(_, _))
        ));
        let head = Actor::new("HEAD1", SiteRole::Head);
        f.engine.withdraw_candidate(c.id, &head).unwrap();
        assert!(f.engine.list_candidates(f.election).unwrap().is_empty());
    }

    #[test]
    fn tallies_match_vote_facts() {
        let f = setup(ElectionStatus::Ongoing);
        let c1 = f
            .engine
            .register_candidate(f.election, &RegNo::from("C1"), "one")
            .unwrap();
        let c2 = f
            .engine
            .register_candidate(f.election, &RegNo::from("C2"), "two")
            .unwrap();

        for (voter, candidate) in [("V1", c1.id), ("V2", c1.id), ("V3", c2.id)] {
            f.engine
                .cast_vote(f.election, &RegNo::from(voter), candidate, Timestamp::new(1_500))
                .unwrap();
        }
        assert_eq!(tallies(&f), vec![2, 1]);
        assert_eq!(f.store.vote_count(f.election).unwrap(), 3);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// One vote per voter: across any sequence of casts, each voter
            /// succeeds at most once and the tallies sum to the number of
            /// distinct successful voters.
            #[test]
            fn one_vote_per_voter(casts in proptest::collection::vec((0u8..6, 0u8..3), 1..40)) {
                let f = setup(ElectionStatus::Ongoing);
                let candidates: Vec<CandidateId> = (0..3)
                    .map(|i| {
                        f.engine
                            .register_candidate(f.election, &RegNo::from(format!("C{i}").as_str()), "m")
                            .unwrap()
                            .id
                    })
                    .collect();

                let mut succeeded: std::collections::BTreeSet<String> = Default::default();
                for (voter, candidate) in casts {
                    let reg = format!("V{voter}");
                    let result = f.engine.cast_vote(
                        f.election,
                        &RegNo::from(reg.as_str()),
                        candidates[candidate as usize],
                        Timestamp::new(1_500),
                    );
                    if succeeded.contains(&reg) {
                        prop_assert!(
                            matches!(result, Err(TallyError::DuplicateVote { .. })),
                            "expected Err(TallyError::DuplicateVote), got {result:?}"
                        );
                    } else {
                        prop_assert!(result.is_ok());
                        succeeded.insert(reg);
                    }
                }

                let total: u64 = f
                    .engine
                    .list_candidates(f.election)
                    .unwrap()
                    .iter()
                    .map(|c| c.votes)
                    .sum();
                prop_assert_eq!(total, succeeded.len() as u64);
                prop_assert_eq!(f.store.vote_count(f.election).unwrap(), succeeded.len() as u64);
            }
        }
    }
}
