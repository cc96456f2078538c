//! `UserStore` implementation.

use crate::MemoryStore;
use agora_store::{StoreError, UserRecord, UserStore};
use agora_types::RegNo;

impl UserStore for MemoryStore {
    fn get_user(&self, reg_no: &RegNo) -> Result<UserRecord, StoreError> {
        self.read()?
            .users
            .get(reg_no)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {reg_no}")))
    }

    fn put_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        self.write()?
            .users
            .insert(user.reg_no.clone(), user.clone());
        Ok(())
    }

    fn user_exists(&self, reg_no: &RegNo) -> Result<bool, StoreError> {
        Ok(self.read()?.users.contains_key(reg_no))
    }

    fn user_count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.users.len() as u64)
    }
}
