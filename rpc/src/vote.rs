//! Vote casting and the advisory has-voted check.

use std::sync::Arc;

use agora_store::Directory;
use agora_types::{CandidateId, ElectionId, RegNo, Timestamp};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;
use crate::state::ApiState;

#[derive(Deserialize)]
pub struct CastVoteRequest {
    pub candidate: CandidateId,
}

#[derive(Serialize)]
pub struct CastVoteResponse {
    pub election: ElectionId,
    pub candidate: CandidateId,
    pub cast: bool,
}

#[derive(Serialize)]
pub struct VoteCheckResponse {
    pub election: ElectionId,
    pub voter: RegNo,
    pub has_voted: bool,
}

/// The voter is always the authenticated user; the body only names the
/// candidate.
pub async fn cast<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path(election): Path<ElectionId>,
    headers: HeaderMap,
    Json(req): Json<CastVoteRequest>,
) -> Result<Json<CastVoteResponse>, RpcError> {
    let actor = state.authenticate(&headers)?;
    state
        .tally
        .cast_vote(election, &actor.reg_no, req.candidate, Timestamp::now())?;
    Ok(Json(CastVoteResponse {
        election,
        candidate: req.candidate,
        cast: true,
    }))
}

pub async fn check<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Path((election, voter)): Path<(ElectionId, RegNo)>,
) -> Result<Json<VoteCheckResponse>, RpcError> {
    state.elections.get(election)?;
    let has_voted = state.tally.has_voted(&voter, election)?;
    Ok(Json(VoteCheckResponse {
        election,
        voter,
        has_voted,
    }))
}
