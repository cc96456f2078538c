//! `MembershipStore` implementation.

use crate::MemoryStore;
use agora_store::{MembershipRecord, MembershipStore, NewMembership, StoreError};
use agora_types::{ClubId, MembershipId, MembershipStatus, RegNo};

impl MembershipStore for MemoryStore {
    fn get_membership(&self, id: MembershipId) -> Result<MembershipRecord, StoreError> {
        self.read()?
            .memberships
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("membership {id}")))
    }

    fn membership_of(
        &self,
        user: &RegNo,
        club: ClubId,
    ) -> Result<Option<MembershipRecord>, StoreError> {
        let tables = self.read()?;
        let key = (user.clone(), club);
        Ok(tables
            .membership_index
            .get(&key)
            .and_then(|id| tables.memberships.get(id))
            .cloned())
    }

    fn insert_membership(&self, new: &NewMembership) -> Result<MembershipRecord, StoreError> {
        let mut tables = self.write()?;
        let key = (new.user.clone(), new.club);
        if tables.membership_index.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "membership {}/{}",
                new.user, new.club
            )));
        }
        let id = tables.alloc_membership_id();
        let record = MembershipRecord {
            id,
            user: new.user.clone(),
            club: new.club,
            status: new.status,
            requested_at: new.requested_at,
        };
        tables.memberships.insert(id, record.clone());
        tables.membership_index.insert(key, id);
        Ok(record)
    }

    fn set_membership_status(
        &self,
        id: MembershipId,
        status: MembershipStatus,
    ) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let record = tables
            .memberships
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("membership {id}")))?;
        record.status = status;
        Ok(())
    }

    fn memberships_of_user(&self, user: &RegNo) -> Result<Vec<MembershipRecord>, StoreError> {
        Ok(self
            .read()?
            .memberships
            .values()
            .filter(|m| m.user == *user)
            .cloned()
            .collect())
    }

    fn memberships_of_club(&self, club: ClubId) -> Result<Vec<MembershipRecord>, StoreError> {
        Ok(self
            .read()?
            .memberships
            .values()
            .filter(|m| m.club == club)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::Timestamp;

    fn new_membership(user: &str, club: u64) -> NewMembership {
        NewMembership {
            user: RegNo::from(user),
            club: ClubId::new(club),
            status: MembershipStatus::Pending,
            requested_at: Timestamp::new(100),
        }
    }

    #[test]
    fn one_record_per_pair() {
        let store = MemoryStore::new();
        store.insert_membership(&new_membership("R1", 1)).unwrap();
        assert!(matches!(
            store.insert_membership(&new_membership("R1", 1)),
            Err(StoreError::Duplicate(_))
        ));
        // Different club is fine.
        store.insert_membership(&new_membership("R1", 2)).unwrap();
        assert_eq!(
            store
                .memberships_of_user(&RegNo::from("R1"))
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn status_is_updated_in_place() {
        let store = MemoryStore::new();
        let m = store.insert_membership(&new_membership("R1", 1)).unwrap();
        store
            .set_membership_status(m.id, MembershipStatus::Approved)
            .unwrap();
        let found = store
            .membership_of(&RegNo::from("R1"), ClubId::new(1))
            .unwrap()
            .expect("pair indexed");
        assert_eq!(found.status, MembershipStatus::Approved);
    }
}
