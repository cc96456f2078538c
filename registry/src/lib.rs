//! Club membership registry.
//!
//! Tracks join requests and their approval state per (user, club). At most
//! one non-rejected membership exists per pair; a re-request after rejection
//! flips the existing record back to pending.

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::MembershipRegistry;
