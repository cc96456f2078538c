//! Results projection.
//!
//! A pure, read-only derivation over a snapshot of an election and its
//! candidates: total votes, deterministic ranking, declared winner, integer
//! percentages, and the winning margin. Nothing here touches storage; the
//! caller hands in the records it already read.

pub mod projector;

pub use projector::{percentage, project, ElectionResults, RankedCandidate};
