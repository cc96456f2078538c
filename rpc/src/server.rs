//! Axum-based HTTP server.

use std::sync::Arc;

use agora_store::Directory;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::state::ApiState;
use crate::{auth, club, election, vote};

/// Build the full API router over a shared [`ApiState`].
pub fn router<D: Directory + Send + Sync + 'static>(state: Arc<ApiState<D>>) -> Router {
    Router::new()
        .route("/auth/register", post(auth::register::<D>))
        .route("/auth/login", post(auth::login::<D>))
        .route("/auth/logout", post(auth::logout::<D>))
        .route("/election/create", post(election::create::<D>))
        .route("/election/all", get(election::list::<D>))
        .route(
            "/election/:id",
            get(election::show::<D>).delete(election::remove::<D>),
        )
        .route("/election/:id/status", patch(election::set_status::<D>))
        .route(
            "/election/:id/candidates",
            get(election::candidates::<D>).post(election::register_candidate::<D>),
        )
        .route("/election/:id/results", get(election::results::<D>))
        .route("/candidate/:id", delete(election::withdraw_candidate::<D>))
        .route("/vote/cast/:election", post(vote::cast::<D>))
        .route("/vote/check/:election/:voter", get(vote::check::<D>))
        .route("/club/all", get(club::list::<D>))
        .route("/club/:id", get(club::show::<D>))
        .route("/club/:id/join", post(club::join::<D>))
        .route("/club/:id/members", get(club::members::<D>))
        .route("/user/:reg_no/memberships", get(club::memberships_of::<D>))
        .route("/membership/:id/decision", post(club::decide::<D>))
        .route("/position/all", get(club::positions::<D>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The HTTP server, configured with a port and shared state.
pub struct RpcServer<D> {
    pub port: u16,
    pub state: Arc<ApiState<D>>,
}

impl<D: Directory + Send + Sync + 'static> RpcServer<D> {
    pub fn new(port: u16, state: Arc<ApiState<D>>) -> Self {
        Self { port, state }
    }

    /// Bind and serve until shut down.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let app = router(self.state.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        info!("API listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await
    }
}
