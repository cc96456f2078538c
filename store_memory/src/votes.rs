//! `VoteStore` implementation.
//!
//! The vote table is keyed by `(voter, election)`, so the unique constraint
//! is the map key itself; `insert_vote` under the exclusive write lock is
//! the serialized check-then-insert the tally engine depends on.

use crate::MemoryStore;
use agora_store::{StoreError, VoteRecord, VoteStore};
use agora_types::{ElectionId, RegNo};

impl VoteStore for MemoryStore {
    fn insert_vote(&self, vote: &VoteRecord) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let key = (vote.voter.clone(), vote.election);
        if tables.votes.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "vote {}/{}",
                vote.voter, vote.election
            )));
        }
        tables.votes.insert(key, vote.clone());
        Ok(())
    }

    fn has_vote(&self, voter: &RegNo, election: ElectionId) -> Result<bool, StoreError> {
        Ok(self
            .read()?
            .votes
            .contains_key(&(voter.clone(), election)))
    }

    fn vote_count(&self, election: ElectionId) -> Result<u64, StoreError> {
        Ok(self
            .read()?
            .votes
            .keys()
            .filter(|(_, e)| *e == election)
            .count() as u64)
    }

    fn remove_votes_of(&self, election: ElectionId) -> Result<u64, StoreError> {
        let mut tables = self.write()?;
        let before = tables.votes.len();
        tables.votes.retain(|(_, e), _| *e != election);
        Ok((before - tables.votes.len()) as u64)
    }
}
