//! Election lifecycle, candidacy, and results endpoints.

use std::sync::Arc;

use agora_elections::ElectionFilter;
use agora_results::{project, ElectionResults};
use agora_store::{CandidateRecord, Directory, ElectionRecord};
use agora_types::{
    CandidateId, ClubId, ElectionId, ElectionStatus, PositionId, RegNo, Timestamp,
};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;
use crate::state::ApiState;

#[derive(Deserialize)]
pub struct CreateElectionRequest {
    pub club: ClubId,
    pub position: PositionId,
    pub start: Timestamp,
    pub end: Timestamp,
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: ElectionStatus,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<ElectionStatus>,
    pub club: Option<ClubId>,
}

#[derive(Serialize)]
pub struct DeleteElectionResponse {
    pub election: ElectionId,
    pub candidates_removed: u64,
    pub votes_removed: u64,
}

#[derive(Deserialize)]
pub struct RegisterCandidateRequest {
    /// Defaults to the authenticated user when absent. Standing someone
    /// else requires authority over the election's club.
    pub holder: Option<RegNo>,
    #[serde(default)]
    pub manifesto: String,
}

pub async fn create<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    headers: HeaderMap,
    Json(req): Json<CreateElectionRequest>,
) -> Result<Json<ElectionRecord>, RpcError> {
    let actor = state.authenticate(&headers)?;
    let record = state.elections.create(
        req.club,
        req.position,
        req.start,
        req.end,
        &actor,
        Timestamp::now(),
    )?;
    Ok(Json(record))
}

pub async fn list<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ElectionRecord>>, RpcError> {
    let records = state.elections.list(ElectionFilter {
        status: query.status,
        club: query.club,
    })?;
    Ok(Json(records))
}

pub async fn show<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ElectionId>,
) -> Result<Json<ElectionRecord>, RpcError> {
    Ok(Json(state.elections.get(id)?))
}

pub async fn set_status<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ElectionId>,
    headers: HeaderMap,
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<ElectionRecord>, RpcError> {
    let actor = state.authenticate(&headers)?;
    Ok(Json(state.elections.set_status(id, req.status, &actor)?))
}

pub async fn remove<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ElectionId>,
    headers: HeaderMap,
) -> Result<Json<DeleteElectionResponse>, RpcError> {
    let actor = state.authenticate(&headers)?;
    let summary = state.elections.delete(id, &actor)?;
    Ok(Json(DeleteElectionResponse {
        election: id,
        candidates_removed: summary.candidates,
        votes_removed: summary.votes,
    }))
}

pub async fn candidates<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ElectionId>,
) -> Result<Json<Vec<CandidateRecord>>, RpcError> {
    // Surface NotFound for a missing election rather than an empty list.
    state.elections.get(id)?;
    Ok(Json(state.tally.list_candidates(id)?))
}

pub async fn register_candidate<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ElectionId>,
    headers: HeaderMap,
    Json(req): Json<RegisterCandidateRequest>,
) -> Result<Json<CandidateRecord>, RpcError> {
    let actor = state.authenticate(&headers)?;
    let holder = match req.holder {
        Some(other) if other != actor.reg_no => {
            let election = state.elections.get(id)?;
            if !actor.is_admin() && !state.directory.is_head_of(&actor.reg_no, election.club)? {
                return Err(agora_elections::ElectionError::Unauthorized(
                    actor.reg_no.clone(),
                    election.club,
                )
                .into());
            }
            other
        }
        _ => actor.reg_no.clone(),
    };
    let record = state.tally.register_candidate(id, &holder, req.manifesto)?;
    Ok(Json(record))
}

pub async fn withdraw_candidate<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<CandidateId>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, RpcError> {
    let actor = state.authenticate(&headers)?;
    state.tally.withdraw_candidate(id, &actor)?;
    Ok(Json(serde_json::json!({ "withdrawn": id })))
}

pub async fn results<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(id): Path<ElectionId>,
) -> Result<Json<ElectionResults>, RpcError> {
    let election = state.elections.get(id)?;
    let candidates = state.tally.list_candidates(id)?;
    Ok(Json(project(&election, &candidates)))
}
