//! Session storage trait.

use crate::StoreError;
use agora_types::{RegNo, Timestamp};
use serde::{Deserialize, Serialize};

/// A server-side session: opaque token to user identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque hex token handed to the client.
    pub token: String,
    pub user: RegNo,
    pub issued_at: Timestamp,
}

/// Trait for session storage operations.
pub trait SessionStore {
    /// Insert or overwrite a session keyed by its token.
    fn put_session(&self, session: &SessionRecord) -> Result<(), StoreError>;

    fn get_session(&self, token: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Remove a session. Returns whether one existed.
    fn remove_session(&self, token: &str) -> Result<bool, StoreError>;
}
