//! Club membership storage trait.

use crate::StoreError;
use agora_types::{ClubId, MembershipId, MembershipStatus, RegNo, Timestamp};
use serde::{Deserialize, Serialize};

/// A (user, club) membership and its approval state.
///
/// At most one record exists per (user, club) pair; a re-request after
/// rejection overwrites the existing record rather than adding a second.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub id: MembershipId,
    pub user: RegNo,
    pub club: ClubId,
    pub status: MembershipStatus,
    pub requested_at: Timestamp,
}

/// Fields for a membership about to be created; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewMembership {
    pub user: RegNo,
    pub club: ClubId,
    pub status: MembershipStatus,
    pub requested_at: Timestamp,
}

/// Trait for membership storage operations.
pub trait MembershipStore {
    fn get_membership(&self, id: MembershipId) -> Result<MembershipRecord, StoreError>;

    /// Look up the membership record for a (user, club) pair, if any.
    fn membership_of(
        &self,
        user: &RegNo,
        club: ClubId,
    ) -> Result<Option<MembershipRecord>, StoreError>;

    /// Insert a new membership, allocating a fresh id. Returns
    /// `StoreError::Duplicate` if a record for the pair already exists;
    /// callers that mean to overwrite use [`set_membership_status`].
    ///
    /// [`set_membership_status`]: MembershipStore::set_membership_status
    fn insert_membership(&self, new: &NewMembership) -> Result<MembershipRecord, StoreError>;

    fn set_membership_status(
        &self,
        id: MembershipId,
        status: MembershipStatus,
    ) -> Result<(), StoreError>;

    fn memberships_of_user(&self, user: &RegNo) -> Result<Vec<MembershipRecord>, StoreError>;

    fn memberships_of_club(&self, club: ClubId) -> Result<Vec<MembershipRecord>, StoreError>;
}
