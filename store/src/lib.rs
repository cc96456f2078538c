//! Abstract storage traits for Agora.
//!
//! Every storage backend (in-memory, or a future embedded database)
//! implements these traits. The engine crates depend only on the traits,
//! bundled together by the [`Directory`] supertrait.

pub mod candidate;
pub mod club;
pub mod directory;
pub mod election;
pub mod error;
pub mod membership;
pub mod position;
pub mod session;
pub mod user;
pub mod vote;

pub use candidate::{CandidateRecord, CandidateStore, NewCandidate};
pub use club::{ClubRecord, ClubStore, NewClub};
pub use directory::{CascadeSummary, Directory};
pub use election::{ElectionRecord, ElectionStore, NewElection};
pub use error::StoreError;
pub use membership::{MembershipRecord, MembershipStore, NewMembership};
pub use position::{NewPosition, PositionRecord, PositionStore};
pub use session::{SessionRecord, SessionStore};
pub use user::{UserRecord, UserStore};
pub use vote::{VoteRecord, VoteStore};
