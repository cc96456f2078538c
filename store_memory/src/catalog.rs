//! `ClubStore` and `PositionStore` implementations.

use crate::MemoryStore;
use agora_store::{
    ClubRecord, ClubStore, NewClub, NewPosition, PositionRecord, PositionStore, StoreError,
};
use agora_types::{ClubId, PositionId, RegNo};

impl ClubStore for MemoryStore {
    fn get_club(&self, id: ClubId) -> Result<ClubRecord, StoreError> {
        self.read()?
            .clubs
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("club {id}")))
    }

    fn insert_club(&self, new: &NewClub) -> Result<ClubRecord, StoreError> {
        let mut tables = self.write()?;
        let id = tables.alloc_club_id();
        let record = ClubRecord {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            category: new.category.clone(),
            head: new.head.clone(),
        };
        tables.clubs.insert(id, record.clone());
        Ok(record)
    }

    fn set_club_head(&self, id: ClubId, head: &RegNo) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let club = tables
            .clubs
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("club {id}")))?;
        club.head = head.clone();
        Ok(())
    }

    fn iter_clubs(&self) -> Result<Vec<ClubRecord>, StoreError> {
        Ok(self.read()?.clubs.values().cloned().collect())
    }
}

impl PositionStore for MemoryStore {
    fn get_position(&self, id: PositionId) -> Result<PositionRecord, StoreError> {
        self.read()?
            .positions
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("position {id}")))
    }

    fn insert_position(&self, new: &NewPosition) -> Result<PositionRecord, StoreError> {
        let mut tables = self.write()?;
        let id = tables.alloc_position_id();
        let record = PositionRecord {
            id,
            name: new.name.clone(),
        };
        tables.positions.insert(id, record.clone());
        Ok(record)
    }

    fn iter_positions(&self) -> Result<Vec<PositionRecord>, StoreError> {
        Ok(self.read()?.positions.values().cloned().collect())
    }
}
