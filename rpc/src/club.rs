//! Club catalog, positions, and membership endpoints.

use std::sync::Arc;

use agora_store::{ClubRecord, ClubStore, Directory, MembershipRecord, PositionRecord, PositionStore};
use agora_types::{ClubId, MembershipId, RegNo, Timestamp};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::error::RpcError;
use crate::state::ApiState;

#[derive(Deserialize)]
pub struct DecisionRequest {
    pub approve: bool,
}

pub async fn list<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
) -> Result<Json<Vec<ClubRecord>>, RpcError> {
    Ok(Json(state.directory.club_store().iter_clubs()?))
}

pub async fn show<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ClubId>,
) -> Result<Json<ClubRecord>, RpcError> {
    match state.directory.club_store().get_club(id) {
        Ok(club) => Ok(Json(club)),
        Err(agora_store::StoreError::NotFound(_)) => {
            Err(agora_registry::RegistryError::NotFound(format!("club {id}")).into())
        }
        Err(e) => Err(RpcError::Store(e)),
    }
}

pub async fn positions<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
) -> Result<Json<Vec<PositionRecord>>, RpcError> {
    Ok(Json(state.directory.position_store().iter_positions()?))
}

/// Request to join a club as the authenticated user.
pub async fn join<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ClubId>,
    headers: HeaderMap,
) -> Result<Json<MembershipRecord>, RpcError> {
    let actor = state.authenticate(&headers)?;
    let record = state
        .registry
        .request_join(&actor.reg_no, id, Timestamp::now())?;
    Ok(Json(record))
}

/// Approved members of a club.
pub async fn members<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ClubId>,
) -> Result<Json<Vec<MembershipRecord>>, RpcError> {
    Ok(Json(state.registry.approved_members(id)?))
}

pub async fn memberships_of<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(reg_no): Path<RegNo>,
) -> Result<Json<Vec<MembershipRecord>>, RpcError> {
    Ok(Json(state.registry.list_for_user(&reg_no)?))
}

pub async fn decide<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<MembershipId>,
    headers: HeaderMap,
    Json(req): Json<DecisionRequest>,
) -> Result<Json<MembershipRecord>, RpcError> {
    let actor = state.authenticate(&headers)?;
    Ok(Json(state.registry.decide(id, req.approve, &actor)?))
}
