//! Identity keys for every record family.
//!
//! Users are keyed by their registration number (a string issued outside the
//! system, immutable once created). Everything else carries a numeric id
//! allocated by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's registration number — the unique identity key for a user.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegNo(String);

impl RegNo {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw registration number string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A registration number must be non-empty and contain no whitespace.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && !self.0.chars().any(char::is_whitespace)
    }
}

impl fmt::Display for RegNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RegNo {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RegNo {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

numeric_id!(
    /// Identity key of a club.
    ClubId
);
numeric_id!(
    /// Identity key of a position in the club's catalog (e.g. "President").
    PositionId
);
numeric_id!(
    /// Identity key of an election.
    ElectionId
);
numeric_id!(
    /// Identity key of a candidacy within one election.
    CandidateId
);
numeric_id!(
    /// Identity key of a (user, club) membership record.
    MembershipId
);
