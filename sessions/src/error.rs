use agora_store::StoreError;
use agora_types::RegNo;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("registration number {0} is already taken")]
    DuplicateUser(RegNo),

    #[error("invalid registration number or password")]
    InvalidCredentials,

    #[error("invalid or expired session token")]
    InvalidToken,

    #[error("invalid registration input: {0}")]
    Validation(String),

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
