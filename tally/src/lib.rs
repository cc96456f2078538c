//! Candidacy registration and vote tallying.
//!
//! The core invariant of the whole system lives here: at most one vote per
//! `(voter, election)` pair. The engine validates in a fixed order and the
//! final insert goes through the store's atomic insert-if-absent, so a
//! concurrent duplicate cast is rejected no matter how the requests race.

pub mod engine;
pub mod error;

pub use engine::TallyEngine;
pub use error::TallyError;
