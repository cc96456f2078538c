//! RPC error type and its HTTP mapping.

use agora_elections::ElectionError;
use agora_registry::RegistryError;
use agora_sessions::SessionError;
use agora_store::StoreError;
use agora_tally::TallyError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("missing or malformed Authorization header")]
    Unauthenticated,

    #[error(transparent)]
    Election(#[from] ElectionError),

    #[error(transparent)]
    Tally(#[from] TallyError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Structured failure body: machine-readable kind + human message.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl RpcError {
    /// The machine-readable error kind and HTTP status for this failure.
    fn kind_and_status(&self) -> (&'static str, StatusCode) {
        match self {
            Self::Unauthenticated => ("invalid_token", StatusCode::UNAUTHORIZED),

            Self::Election(e) => match e {
                ElectionError::InvalidWindow { .. } => {
                    ("validation_error", StatusCode::BAD_REQUEST)
                }
                ElectionError::Unauthorized(_, _) => {
                    ("authorization_error", StatusCode::FORBIDDEN)
                }
                ElectionError::InvalidTransition { .. } => {
                    ("invalid_transition", StatusCode::BAD_REQUEST)
                }
                ElectionError::NotFound(_) => ("not_found", StatusCode::NOT_FOUND),
                ElectionError::Store(_) => ("store_error", StatusCode::INTERNAL_SERVER_ERROR),
            },

            Self::Tally(e) => match e {
                TallyError::ElectionNotOpen { .. } => {
                    ("election_not_open", StatusCode::BAD_REQUEST)
                }
                TallyError::DuplicateVote { .. } => ("duplicate_vote", StatusCode::BAD_REQUEST),
                TallyError::UnknownCandidate { .. } => {
                    ("unknown_candidate", StatusCode::NOT_FOUND)
                }
                TallyError::DuplicateCandidacy { .. } => {
                    ("validation_error", StatusCode::BAD_REQUEST)
                }
                TallyError::Unauthorized(_, _) => ("authorization_error", StatusCode::FORBIDDEN),
                TallyError::NotFound(_) => ("not_found", StatusCode::NOT_FOUND),
                TallyError::Store(_) => ("store_error", StatusCode::INTERNAL_SERVER_ERROR),
            },

            Self::Registry(e) => match e {
                RegistryError::AlreadyMember(_, _) => ("already_member", StatusCode::CONFLICT),
                RegistryError::Unauthorized(_, _) => {
                    ("authorization_error", StatusCode::FORBIDDEN)
                }
                RegistryError::NotFound(_) => ("not_found", StatusCode::NOT_FOUND),
                RegistryError::Store(_) => ("store_error", StatusCode::INTERNAL_SERVER_ERROR),
            },

            Self::Session(e) => match e {
                SessionError::DuplicateUser(_) => ("duplicate_user", StatusCode::CONFLICT),
                SessionError::InvalidCredentials => {
                    ("invalid_credentials", StatusCode::UNAUTHORIZED)
                }
                SessionError::InvalidToken => ("invalid_token", StatusCode::UNAUTHORIZED),
                SessionError::Validation(_) => ("validation_error", StatusCode::BAD_REQUEST),
                SessionError::Hash(_) | SessionError::Store(_) => {
                    ("store_error", StatusCode::INTERNAL_SERVER_ERROR)
                }
            },

            Self::Store(_) => ("store_error", StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let (error, status) = self.kind_and_status();
        let body = ErrorBody {
            error,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
