//! `ElectionStore` implementation.

use crate::MemoryStore;
use agora_store::{ElectionRecord, ElectionStore, NewElection, StoreError};
use agora_types::{ElectionId, ElectionStatus};

impl ElectionStore for MemoryStore {
    fn get_election(&self, id: ElectionId) -> Result<ElectionRecord, StoreError> {
        self.read()?
            .elections
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("election {id}")))
    }

    fn insert_election(&self, new: &NewElection) -> Result<ElectionRecord, StoreError> {
        let mut tables = self.write()?;
        let id = tables.alloc_election_id();
        let record = ElectionRecord {
            id,
            club: new.club,
            position: new.position,
            created_by: new.created_by.clone(),
            start: new.start,
            end: new.end,
            status: new.status,
            created_at: new.created_at,
        };
        tables.elections.insert(id, record.clone());
        Ok(record)
    }

    fn set_election_status(
        &self,
        id: ElectionId,
        status: ElectionStatus,
    ) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let record = tables
            .elections
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("election {id}")))?;
        record.status = status;
        Ok(())
    }

    fn remove_election(&self, id: ElectionId) -> Result<(), StoreError> {
        self.write()?
            .elections
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("election {id}")))
    }

    fn iter_elections(&self) -> Result<Vec<ElectionRecord>, StoreError> {
        Ok(self.read()?.elections.values().cloned().collect())
    }

    fn election_count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.elections.len() as u64)
    }
}
