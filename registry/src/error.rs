use agora_store::StoreError;
use agora_types::{ClubId, RegNo};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("user {0} is already an approved member of club {1}")]
    AlreadyMember(RegNo, ClubId),

    #[error("actor {0} lacks authority over club {1}")]
    Unauthorized(RegNo, ClubId),

    #[error("{0} not found")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
