//! Site-wide user roles.

use serde::{Deserialize, Serialize};

/// The site-wide role of a user.
///
/// `Head` is informational — it marks a user who heads at least one club.
/// Authority over a specific club is always checked against that club's
/// `head` field, never against this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteRole {
    /// Ordinary user.
    User,
    /// Heads one or more clubs.
    Head,
    /// Authority over all clubs and elections.
    Admin,
}

impl SiteRole {
    /// Whether this role grants authority over every club.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Head => "head",
            Self::Admin => "admin",
        }
    }
}

impl Default for SiteRole {
    fn default() -> Self {
        Self::User
    }
}
