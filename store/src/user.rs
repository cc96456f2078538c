//! User storage trait.

use crate::StoreError;
use agora_types::{RegNo, SiteRole};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    /// Registration number — immutable identity key.
    pub reg_no: RegNo,
    /// Display name.
    pub name: String,
    /// Argon2id password hash in PHC string format.
    pub password_hash: String,
    /// Site-wide role. Elevated externally; never self-assigned.
    pub role: SiteRole,
}

/// Trait for user storage operations.
pub trait UserStore {
    fn get_user(&self, reg_no: &RegNo) -> Result<UserRecord, StoreError>;

    /// Insert or overwrite a user record keyed by its `reg_no`.
    fn put_user(&self, user: &UserRecord) -> Result<(), StoreError>;

    fn user_exists(&self, reg_no: &RegNo) -> Result<bool, StoreError>;

    fn user_count(&self) -> Result<u64, StoreError>;
}
