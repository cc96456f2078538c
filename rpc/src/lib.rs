//! HTTP API for Agora.
//!
//! Exposes the engines over a JSON request/response surface:
//! - session endpoints (register, login, logout)
//! - election lifecycle (create, status change, delete, listings)
//! - candidacy and vote casting
//! - derived results
//! - club membership (join, decide, listings)
//!
//! Mutating endpoints authenticate via `Authorization: Bearer <token>`; the
//! acting user is always resolved server-side from the session store.

pub mod auth;
pub mod club;
pub mod election;
pub mod error;
pub mod server;
pub mod state;
pub mod vote;

pub use error::RpcError;
pub use server::{router, RpcServer};
pub use state::ApiState;
