//! Lifecycle status enums for elections and club memberships.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle status of an election.
///
/// Status is an explicit stored field mutated by authorized actors (and the
/// periodic time sweep), never derived on the fly from the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    /// Created but not yet open for voting.
    Upcoming,
    /// Open for voting.
    Ongoing,
    /// Closed. Terminal — no transition leaves this state.
    Completed,
}

impl ElectionStatus {
    /// Whether votes may be cast while in this status.
    pub fn accepts_votes(&self) -> bool {
        matches!(self, Self::Ongoing)
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether moving from this status to `next` is a legal transition.
    ///
    /// Every move is legal except leaving `Completed`; this includes the
    /// `Ongoing → Upcoming` reset used to re-open a mistakenly started
    /// election.
    pub fn can_transition_to(&self, next: ElectionStatus) -> bool {
        if *self == next {
            return true;
        }
        !self.is_terminal()
    }

    /// Sort rank used when listing elections: ongoing first, completed last.
    pub fn list_rank(&self) -> u8 {
        match self {
            Self::Ongoing => 0,
            Self::Upcoming => 1,
            Self::Completed => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    /// Parse from the lowercase wire form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(Self::Upcoming),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The approval state of a (user, club) membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Join requested, awaiting a head/admin decision.
    Pending,
    /// Approved member of the club.
    Approved,
    /// Request rejected. A re-request overwrites this back to pending.
    Rejected,
}

impl MembershipStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
