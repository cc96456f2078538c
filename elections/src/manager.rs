//! The lifecycle manager engine.

use crate::ElectionError;
use agora_store::directory::CascadeSummary;
use agora_store::{
    ClubStore, Directory, ElectionRecord, ElectionStore, NewElection, PositionStore, StoreError,
};
use agora_types::{Actor, ClubId, ElectionId, ElectionStatus, PositionId, Timestamp};
use std::sync::Arc;
use tracing::{info, warn};

/// Optional filters for election listings.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElectionFilter {
    pub status: Option<ElectionStatus>,
    pub club: Option<ClubId>,
}

/// One status change applied by a [`sweep`].
///
/// [`sweep`]: LifecycleManager::sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepTransition {
    pub election: ElectionId,
    pub from: ElectionStatus,
    pub to: ElectionStatus,
}

/// Engine owning election records and the legality of status transitions.
pub struct LifecycleManager<D> {
    directory: Arc<D>,
}

fn found<T>(res: Result<T, StoreError>) -> Result<T, ElectionError> {
    res.map_err(|e| match e {
        StoreError::NotFound(what) => ElectionError::NotFound(what),
        other => ElectionError::Store(other),
    })
}

impl<D: Directory> LifecycleManager<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Create a new election for a club position.
    ///
    /// The window must satisfy `start < end` and the creator must be an
    /// admin or the head of the club. Status always initializes to
    /// `upcoming`; the sweep (or a manual status change) promotes it once
    /// the start time passes.
    pub fn create(
        &self,
        club: ClubId,
        position: PositionId,
        start: Timestamp,
        end: Timestamp,
        creator: &Actor,
        now: Timestamp,
    ) -> Result<ElectionRecord, ElectionError> {
        if start >= end {
            return Err(ElectionError::InvalidWindow { start, end });
        }
        let d = &*self.directory;
        found(d.club_store().get_club(club))?;
        found(d.position_store().get_position(position))?;
        self.authorize(creator, club)?;

        let record = d.election_store().insert_election(&NewElection {
            club,
            position,
            created_by: creator.reg_no.clone(),
            start,
            end,
            status: ElectionStatus::Upcoming,
            created_at: now,
        })?;
        info!(
            election = %record.id,
            %club,
            %position,
            created_by = %creator.reg_no,
            window = %agora_utils::format_duration(end.as_secs() - start.as_secs()),
            "election created"
        );
        Ok(record)
    }

    /// Change the stored status of an election.
    ///
    /// Fails with `Unauthorized` unless the actor is an admin or the head of
    /// the election's club, and with `InvalidTransition` when attempting to
    /// leave `completed`.
    pub fn set_status(
        &self,
        election: ElectionId,
        new_status: ElectionStatus,
        actor: &Actor,
    ) -> Result<ElectionRecord, ElectionError> {
        let d = &*self.directory;
        let record = found(d.election_store().get_election(election))?;
        self.authorize(actor, record.club)?;
        if !record.status.can_transition_to(new_status) {
            return Err(ElectionError::InvalidTransition {
                from: record.status,
                to: new_status,
            });
        }
        d.election_store().set_election_status(election, new_status)?;
        info!(
            %election,
            from = %record.status,
            to = %new_status,
            by = %actor.reg_no,
            "election status changed"
        );
        Ok(found(d.election_store().get_election(election))?)
    }

    /// Delete an election together with its candidates and votes.
    /// Irreversible.
    pub fn delete(
        &self,
        election: ElectionId,
        actor: &Actor,
    ) -> Result<CascadeSummary, ElectionError> {
        let d = &*self.directory;
        let record = found(d.election_store().get_election(election))?;
        self.authorize(actor, record.club)?;
        let summary = d.delete_election_cascade(election)?;
        warn!(
            %election,
            candidates = summary.candidates,
            votes = summary.votes,
            by = %actor.reg_no,
            "election deleted"
        );
        Ok(summary)
    }

    /// A single election, `NotFound` when absent.
    pub fn get(&self, election: ElectionId) -> Result<ElectionRecord, ElectionError> {
        found(self.directory.election_store().get_election(election))
    }

    /// List elections, optionally filtered, in presentation order:
    /// ongoing before upcoming before completed, then ascending start time,
    /// then ascending id for determinism.
    pub fn list(&self, filter: ElectionFilter) -> Result<Vec<ElectionRecord>, ElectionError> {
        let mut elections = self.directory.election_store().iter_elections()?;
        if let Some(status) = filter.status {
            elections.retain(|e| e.status == status);
        }
        if let Some(club) = filter.club {
            elections.retain(|e| e.club == club);
        }
        elections.sort_by_key(|e| (e.status.list_rank(), e.start, e.id));
        Ok(elections)
    }

    /// Advance elections whose window boundaries have passed:
    /// `upcoming → ongoing` once start is reached, `ongoing → completed`
    /// once end is reached. Returns the transitions applied.
    ///
    /// Manual status changes remain authoritative between sweeps; a reset
    /// election will simply be re-promoted on the next pass.
    pub fn sweep(&self, now: Timestamp) -> Result<Vec<SweepTransition>, ElectionError> {
        let store = self.directory.election_store();
        let mut applied = Vec::new();

        for e in store.elections_with_status(ElectionStatus::Upcoming)? {
            if e.start.has_passed(now) {
                store.set_election_status(e.id, ElectionStatus::Ongoing)?;
                applied.push(SweepTransition {
                    election: e.id,
                    from: ElectionStatus::Upcoming,
                    to: ElectionStatus::Ongoing,
                });
            }
        }
        for e in store.elections_with_status(ElectionStatus::Ongoing)? {
            if e.end.has_passed(now) {
                store.set_election_status(e.id, ElectionStatus::Completed)?;
                applied.push(SweepTransition {
                    election: e.id,
                    from: ElectionStatus::Ongoing,
                    to: ElectionStatus::Completed,
                });
            }
        }

        if !applied.is_empty() {
            info!(transitions = applied.len(), %now, "status sweep applied");
        }
        Ok(applied)
    }

    fn authorize(&self, actor: &Actor, club: ClubId) -> Result<(), ElectionError> {
        if actor.is_admin() || self.directory.is_head_of(&actor.reg_no, club)? {
            Ok(())
        } else {
            Err(ElectionError::Unauthorized(actor.reg_no.clone(), club))
        }
    }
}
