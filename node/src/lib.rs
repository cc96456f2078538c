//! The Agora node: a shared in-memory store, one engine per concern, a
//! periodic election status sweep, and the HTTP API on top.

pub mod config;
pub mod error;
pub mod node;

pub use config::NodeConfig;
pub use error::NodeError;
pub use node::{AgoraNode, SEED_ADMIN_PASSWORD, SEED_ADMIN_REG_NO};
