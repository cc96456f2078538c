//! Session endpoints: register, login, logout.

use std::sync::Arc;

use agora_store::Directory;
use agora_types::{RegNo, SiteRole, Timestamp};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;
use crate::state::{bearer_token, ApiState};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub reg_no: RegNo,
    pub name: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub reg_no: RegNo,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub reg_no: RegNo,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub reg_no: RegNo,
    pub role: SiteRole,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub ended: bool,
}

pub async fn register<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, RpcError> {
    let user = state.sessions.register(&req.reg_no, &req.name, &req.password)?;
    Ok(Json(RegisterResponse {
        reg_no: user.reg_no,
        name: user.name,
    }))
}

pub async fn login<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, RpcError> {
    let session = state
        .sessions
        .login(&req.reg_no, &req.password, Timestamp::now())?;
    let actor = state.sessions.authenticate(&session.token)?;
    Ok(Json(LoginResponse {
        token: session.token,
        reg_no: actor.reg_no,
        role: actor.role,
    }))
}

pub async fn logout<D: Directory>(
    State(state): State<Arc<ApiState<D>>>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, RpcError> {
    let token = bearer_token(&headers)?;
    let ended = state.sessions.logout(token)?;
    Ok(Json(LogoutResponse { ended }))
}
