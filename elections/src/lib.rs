//! Election lifecycle management.
//!
//! Owns the authoritative status of each election and the legality of
//! transitions: `upcoming → ongoing → completed`, plus the explicit
//! `ongoing → upcoming` reset. `completed` is terminal. Status is a stored
//! field mutated by authorized actors; the periodic [`sweep`] additionally
//! advances elections whose window boundaries have passed.
//!
//! [`sweep`]: manager::LifecycleManager::sweep

pub mod error;
pub mod manager;

pub use error::ElectionError;
pub use manager::{ElectionFilter, LifecycleManager, SweepTransition};
