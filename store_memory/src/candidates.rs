//! `CandidateStore` implementation.

use crate::MemoryStore;
use agora_store::{CandidateRecord, CandidateStore, NewCandidate, StoreError};
use agora_types::{CandidateId, ElectionId, RegNo};

impl CandidateStore for MemoryStore {
    fn get_candidate(&self, id: CandidateId) -> Result<CandidateRecord, StoreError> {
        self.read()?
            .candidates
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("candidate {id}")))
    }

    fn insert_candidate(&self, new: &NewCandidate) -> Result<CandidateRecord, StoreError> {
        let mut tables = self.write()?;
        if tables
            .candidates
            .values()
            .any(|c| c.election == new.election && c.holder == new.holder)
        {
            return Err(StoreError::Duplicate(format!(
                "candidate {}/{}",
                new.holder, new.election
            )));
        }
        let id = tables.alloc_candidate_id();
        let record = CandidateRecord {
            id,
            election: new.election,
            holder: new.holder.clone(),
            manifesto: new.manifesto.clone(),
            votes: 0,
        };
        tables.candidates.insert(id, record.clone());
        Ok(record)
    }

    fn candidates_of(&self, election: ElectionId) -> Result<Vec<CandidateRecord>, StoreError> {
        Ok(self
            .read()?
            .candidates
            .values()
            .filter(|c| c.election == election)
            .cloned()
            .collect())
    }

    fn increment_tally(&self, id: CandidateId) -> Result<u64, StoreError> {
        let mut tables = self.write()?;
        let record = tables
            .candidates
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("candidate {id}")))?;
        record.votes += 1;
        Ok(record.votes)
    }

    fn remove_candidate(&self, id: CandidateId) -> Result<(), StoreError> {
        self.write()?
            .candidates
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("candidate {id}")))
    }

    fn remove_candidates_of(&self, election: ElectionId) -> Result<u64, StoreError> {
        let mut tables = self.write()?;
        let before = tables.candidates.len();
        tables.candidates.retain(|_, c| c.election != election);
        Ok((before - tables.candidates.len()) as u64)
    }
}
