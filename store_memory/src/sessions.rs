//! `SessionStore` implementation.

use crate::MemoryStore;
use agora_store::{SessionRecord, SessionStore, StoreError};

impl SessionStore for MemoryStore {
    fn put_session(&self, session: &SessionRecord) -> Result<(), StoreError> {
        self.write()?
            .sessions
            .insert(session.token.clone(), session.clone());
        Ok(())
    }

    fn get_session(&self, token: &str) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.read()?.sessions.get(token).cloned())
    }

    fn remove_session(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.write()?.sessions.remove(token).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::{RegNo, Timestamp};

    #[test]
    fn session_lifecycle() {
        let store = MemoryStore::new();
        let session = SessionRecord {
            token: "abcd1234".to_string(),
            user: RegNo::from("R1"),
            issued_at: Timestamp::new(10),
        };
        store.put_session(&session).unwrap();
        assert!(store.get_session("abcd1234").unwrap().is_some());
        assert!(store.remove_session("abcd1234").unwrap());
        // Second removal is a no-op.
        assert!(!store.remove_session("abcd1234").unwrap());
        assert!(store.get_session("abcd1234").unwrap().is_none());
    }
}
