//! Fundamental types for Agora.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identity keys, timestamps, lifecycle status enums, and roles.

pub mod actor;
pub mod id;
pub mod role;
pub mod status;
pub mod time;

pub use actor::Actor;
pub use id::{CandidateId, ClubId, ElectionId, MembershipId, PositionId, RegNo};
pub use role::SiteRole;
pub use status::{ElectionStatus, MembershipStatus};
pub use time::Timestamp;
