//! In-memory storage backend for Agora.
//!
//! Implements all storage traits from `agora-store` behind a single
//! `RwLock`: every write takes the exclusive lock, which makes
//! check-then-insert sequences (the `(voter, election)` unique constraint,
//! tally increments) atomic with respect to concurrent requests.
//!
//! State can be persisted to a versioned bincode snapshot file and loaded
//! back on startup.

pub mod candidates;
pub mod catalog;
pub mod elections;
pub mod memberships;
pub mod sessions;
pub mod snapshot;
pub mod store;
pub mod tables;
pub mod users;
pub mod votes;

pub use store::MemoryStore;
