use agora_store::StoreError;
use agora_types::{ClubId, ElectionStatus, RegNo, Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElectionError {
    #[error("invalid election window: start {start} is not before end {end}")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    #[error("actor {0} lacks authority over club {1}")]
    Unauthorized(RegNo, ClubId),

    #[error("illegal status transition: {from} -> {to}")]
    InvalidTransition {
        from: ElectionStatus,
        to: ElectionStatus,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
