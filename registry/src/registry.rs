//! The membership registry engine.

use crate::RegistryError;
use agora_store::{
    ClubStore, Directory, MembershipRecord, MembershipStore, NewMembership, StoreError, UserStore,
};
use agora_types::{Actor, ClubId, MembershipId, MembershipStatus, RegNo, Timestamp};
use std::sync::Arc;
use tracing::info;

/// Engine owning join requests and approval decisions.
pub struct MembershipRegistry<D> {
    directory: Arc<D>,
}

/// Map a store-level missing key to the caller-facing not-found error.
fn found<T>(res: Result<T, StoreError>) -> Result<T, RegistryError> {
    res.map_err(|e| match e {
        StoreError::NotFound(what) => RegistryError::NotFound(what),
        other => RegistryError::Store(other),
    })
}

impl<D: Directory> MembershipRegistry<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Request to join a club.
    ///
    /// An approved membership fails with `AlreadyMember`; a pending request
    /// is returned as-is (idempotent); a rejected record is overwritten back
    /// to pending.
    pub fn request_join(
        &self,
        user: &RegNo,
        club: ClubId,
        now: Timestamp,
    ) -> Result<MembershipRecord, RegistryError> {
        let d = &*self.directory;
        found(d.club_store().get_club(club))?;
        if !d.user_store().user_exists(user)? {
            return Err(RegistryError::NotFound(format!("user {user}")));
        }

        match d.membership_store().membership_of(user, club)? {
            Some(existing) if existing.status.is_approved() => {
                Err(RegistryError::AlreadyMember(user.clone(), club))
            }
            Some(existing) if existing.status == MembershipStatus::Pending => Ok(existing),
            Some(rejected) => {
                d.membership_store()
                    .set_membership_status(rejected.id, MembershipStatus::Pending)?;
                info!(%user, %club, "rejected membership re-requested, back to pending");
                Ok(found(d.membership_store().get_membership(rejected.id))?)
            }
            None => {
                let record = d.membership_store().insert_membership(&NewMembership {
                    user: user.clone(),
                    club,
                    status: MembershipStatus::Pending,
                    requested_at: now,
                })?;
                info!(%user, %club, membership = %record.id, "join requested");
                Ok(record)
            }
        }
    }

    /// Approve or reject a pending request. Only an admin or the head of the
    /// club may decide.
    pub fn decide(
        &self,
        membership: MembershipId,
        approve: bool,
        actor: &Actor,
    ) -> Result<MembershipRecord, RegistryError> {
        let d = &*self.directory;
        let record = found(d.membership_store().get_membership(membership))?;
        self.authorize(actor, record.club)?;

        let status = if approve {
            MembershipStatus::Approved
        } else {
            MembershipStatus::Rejected
        };
        d.membership_store()
            .set_membership_status(membership, status)?;
        info!(
            membership = %membership,
            user = %record.user,
            club = %record.club,
            %status,
            decided_by = %actor.reg_no,
            "membership decided"
        );
        Ok(found(d.membership_store().get_membership(membership))?)
    }

    /// All membership records of one user.
    pub fn list_for_user(&self, user: &RegNo) -> Result<Vec<MembershipRecord>, RegistryError> {
        Ok(self.directory.membership_store().memberships_of_user(user)?)
    }

    /// All membership records of one club.
    pub fn list_for_club(&self, club: ClubId) -> Result<Vec<MembershipRecord>, RegistryError> {
        Ok(self.directory.membership_store().memberships_of_club(club)?)
    }

    /// Only the approved members of a club.
    pub fn approved_members(&self, club: ClubId) -> Result<Vec<MembershipRecord>, RegistryError> {
        Ok(self
            .list_for_club(club)?
            .into_iter()
            .filter(|m| m.status.is_approved())
            .collect())
    }

    fn authorize(&self, actor: &Actor, club: ClubId) -> Result<(), RegistryError> {
        if actor.is_admin() || self.directory.is_head_of(&actor.reg_no, club)? {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized(actor.reg_no.clone(), club))
        }
    }
}
