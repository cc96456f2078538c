//! Shared state for the HTTP layer.

use std::sync::Arc;

use agora_elections::LifecycleManager;
use agora_registry::MembershipRegistry;
use agora_sessions::SessionManager;
use agora_store::Directory;
use agora_tally::TallyEngine;
use agora_types::Actor;
use axum::http::HeaderMap;

use crate::RpcError;

/// Everything a handler needs: the directory plus one engine per concern,
/// all sharing the same backing store.
pub struct ApiState<D> {
    pub directory: Arc<D>,
    pub sessions: SessionManager<D>,
    pub registry: MembershipRegistry<D>,
    pub elections: LifecycleManager<D>,
    pub tally: TallyEngine<D>,
}

impl<D: Directory> ApiState<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            sessions: SessionManager::new(directory.clone()),
            registry: MembershipRegistry::new(directory.clone()),
            elections: LifecycleManager::new(directory.clone()),
            tally: TallyEngine::new(directory.clone()),
            directory,
        }
    }

    /// Resolve the acting user from the `Authorization: Bearer` header.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Actor, RpcError> {
        let token = bearer_token(headers)?;
        Ok(self.sessions.authenticate(token)?)
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, RpcError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(RpcError::Unauthenticated)
}
