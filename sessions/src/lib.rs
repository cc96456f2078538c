//! Session and authentication state.
//!
//! Users register with an Argon2id-hashed password and log in to receive an
//! opaque session token. Every request is authenticated server-side by
//! resolving that token back to an [`Actor`]; nothing the client caches is
//! ever authoritative for authorization.
//!
//! [`Actor`]: agora_types::Actor

pub mod error;
pub mod manager;

pub use error::SessionError;
pub use manager::SessionManager;
