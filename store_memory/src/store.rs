//! The `MemoryStore` itself: lock management and the `Directory` impl.

use crate::tables::Tables;
use agora_store::{Directory, StoreError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory implementation of every `agora-store` trait.
///
/// All tables live behind one `RwLock`; reads take the shared lock, writes
/// the exclusive lock. Exclusive writes are what make the vote-fact unique
/// constraint and tally increments race-free.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }
}

impl Directory for MemoryStore {
    type Users = Self;
    type Clubs = Self;
    type Positions = Self;
    type Memberships = Self;
    type Elections = Self;
    type Candidates = Self;
    type Votes = Self;
    type Sessions = Self;

    fn user_store(&self) -> &Self {
        self
    }
    fn club_store(&self) -> &Self {
        self
    }
    fn position_store(&self) -> &Self {
        self
    }
    fn membership_store(&self) -> &Self {
        self
    }
    fn election_store(&self) -> &Self {
        self
    }
    fn candidate_store(&self) -> &Self {
        self
    }
    fn vote_store(&self) -> &Self {
        self
    }
    fn session_store(&self) -> &Self {
        self
    }
}
