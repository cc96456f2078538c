//! End-to-end tests over a full node: store, engines, sweep, snapshot.

use std::path::PathBuf;

use agora_elections::{ElectionError, ElectionFilter};
use agora_node::{AgoraNode, NodeConfig, SEED_ADMIN_REG_NO};
use agora_results::project;
use agora_store::{ClubStore, NewClub, NewPosition, PositionStore, UserStore};
use agora_tally::TallyError;
use agora_types::{Actor, ClubId, ElectionStatus, PositionId, RegNo, SiteRole, Timestamp};

fn node_in(dir: &tempfile::TempDir) -> AgoraNode {
    let config = NodeConfig {
        data_dir: PathBuf::from(dir.path()),
        enable_sweep: false,
        seed_sample_data: false,
        ..Default::default()
    };
    AgoraNode::new(config).unwrap()
}

/// A club headed by "HEAD", one position, three registered users.
struct Fixture {
    node: AgoraNode,
    club: ClubId,
    position: PositionId,
    head: Actor,
    voter: Actor,
    outsider: Actor,
}

fn fixture(dir: &tempfile::TempDir) -> Fixture {
    let node = node_in(dir);
    for (reg, name) in [("HEAD", "Head"), ("REG1", "Voter"), ("REG2", "Outsider")] {
        node.state
            .sessions
            .register(&RegNo::from(reg), name, "pw")
            .unwrap();
    }
    let club = node
        .store
        .insert_club(&NewClub {
            name: "Chess Club".into(),
            description: "Board games".into(),
            category: "games".into(),
            head: RegNo::from("HEAD"),
        })
        .unwrap()
        .id;
    let position = node
        .store
        .insert_position(&NewPosition {
            name: "President".into(),
        })
        .unwrap()
        .id;
    Fixture {
        node,
        club,
        position,
        head: Actor::new("HEAD", SiteRole::User),
        voter: Actor::new("REG1", SiteRole::User),
        outsider: Actor::new("REG2", SiteRole::User),
    }
}

#[test]
fn upcoming_election_rejects_votes() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();

    let election = f
        .node
        .state
        .elections
        .create(
            f.club,
            f.position,
            now.plus_secs(3600),
            now.plus_secs(7200),
            &f.head,
            now,
        )
        .unwrap();
    assert_eq!(election.status, ElectionStatus::Upcoming);

    let candidate = f
        .node
        .state
        .tally
        .register_candidate(election.id, &f.head.reg_no, "")
        .unwrap();
    assert!(matches!(
        f.node
            .state
            .tally
            .cast_vote(election.id, &f.voter.reg_no, candidate.id, now),
        Err(TallyError::ElectionNotOpen { .. })
    ));
}

#[test]
fn one_vote_per_voter_and_tallies_stay_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();
    let state = &f.node.state;

    let election = state
        .elections
        .create(
            f.club,
            f.position,
            now.plus_secs(3600),
            now.plus_secs(7200),
            &f.head,
            now,
        )
        .unwrap();
    state
        .elections
        .set_status(election.id, ElectionStatus::Ongoing, &f.head)
        .unwrap();

    let first = state
        .tally
        .register_candidate(election.id, &RegNo::from("REG1"), "a")
        .unwrap();
    let second = state
        .tally
        .register_candidate(election.id, &RegNo::from("REG2"), "b")
        .unwrap();

    state
        .tally
        .cast_vote(election.id, &f.voter.reg_no, first.id, now)
        .unwrap();

    // The same voter switching candidates is still a duplicate.
    assert!(matches!(
        state.tally.cast_vote(election.id, &f.voter.reg_no, second.id, now),
        Err(TallyError::DuplicateVote { .. })
    ));

    let mut tallies: Vec<u64> = state
        .tally
        .list_candidates(election.id)
        .unwrap()
        .iter()
        .map(|c| c.votes)
        .collect();
    tallies.sort_unstable();
    assert_eq!(tallies, vec![0, 1]);
}

#[test]
fn outsider_cannot_manage_another_clubs_election() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();
    let state = &f.node.state;

    let election = state
        .elections
        .create(
            f.club,
            f.position,
            now.plus_secs(10),
            now.plus_secs(20),
            &f.head,
            now,
        )
        .unwrap();

    assert!(matches!(
        state
            .elections
            .set_status(election.id, ElectionStatus::Ongoing, &f.outsider),
        Err(ElectionError::Unauthorized(_, _))
    ));
    assert!(matches!(
        state.elections.delete(election.id, &f.outsider),
        Err(ElectionError::Unauthorized(_, _))
    ));
    // An admin needs no club tie.
    let admin = Actor::new("ROOT", SiteRole::Admin);
    state
        .elections
        .set_status(election.id, ElectionStatus::Ongoing, &admin)
        .unwrap();
}

#[test]
fn deleting_an_election_cascades() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();
    let state = &f.node.state;

    let election = state
        .elections
        .create(
            f.club,
            f.position,
            now.plus_secs(10),
            now.plus_secs(20),
            &f.head,
            now,
        )
        .unwrap();
    state
        .elections
        .set_status(election.id, ElectionStatus::Ongoing, &f.head)
        .unwrap();
    let candidate = state
        .tally
        .register_candidate(election.id, &f.head.reg_no, "")
        .unwrap();
    state
        .tally
        .cast_vote(election.id, &f.voter.reg_no, candidate.id, now)
        .unwrap();

    let summary = state.elections.delete(election.id, &f.head).unwrap();
    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.votes, 1);

    assert!(matches!(
        state.elections.get(election.id),
        Err(ElectionError::NotFound(_))
    ));
    assert!(state.tally.list_candidates(election.id).unwrap().is_empty());
}

#[test]
fn sweep_advances_elections_through_their_window() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();
    let state = &f.node.state;

    let election = state
        .elections
        .create(
            f.club,
            f.position,
            now.plus_secs(100),
            now.plus_secs(200),
            &f.head,
            now,
        )
        .unwrap();

    // Before the window opens, nothing moves.
    assert!(state.elections.sweep(now).unwrap().is_empty());
    assert_eq!(
        state.elections.get(election.id).unwrap().status,
        ElectionStatus::Upcoming
    );

    let applied = state.elections.sweep(now.plus_secs(150)).unwrap();
    assert_eq!(applied.len(), 1);
    assert_eq!(
        state.elections.get(election.id).unwrap().status,
        ElectionStatus::Ongoing
    );

    let applied = state.elections.sweep(now.plus_secs(300)).unwrap();
    assert_eq!(applied.len(), 1);
    assert_eq!(
        state.elections.get(election.id).unwrap().status,
        ElectionStatus::Completed
    );

    // Completed is terminal, the sweep never resurrects it.
    assert!(state.elections.sweep(now.plus_secs(400)).unwrap().is_empty());
}

#[test]
fn completed_election_declares_winner_and_margin() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();
    let state = &f.node.state;

    let election = state
        .elections
        .create(
            f.club,
            f.position,
            now.plus_secs(10),
            now.plus_secs(20),
            &f.head,
            now,
        )
        .unwrap();
    state
        .elections
        .set_status(election.id, ElectionStatus::Ongoing, &f.head)
        .unwrap();

    let counts = [10u64, 7, 3];
    let mut candidates = Vec::new();
    for (i, _) in counts.iter().enumerate() {
        candidates.push(
            state
                .tally
                .register_candidate(election.id, &RegNo::from(format!("CAND{i}")), "")
                .unwrap(),
        );
    }
    for (i, &votes) in counts.iter().enumerate() {
        for v in 0..votes {
            let voter = RegNo::from(format!("V{i}-{v}"));
            state
                .tally
                .cast_vote(election.id, &voter, candidates[i].id, now)
                .unwrap();
        }
    }
    state
        .elections
        .set_status(election.id, ElectionStatus::Completed, &f.head)
        .unwrap();

    let record = state.elections.get(election.id).unwrap();
    let results = project(&record, &state.tally.list_candidates(election.id).unwrap());
    assert_eq!(results.total_votes, 20);
    let percents: Vec<u32> = results.ranking.iter().map(|r| r.percent).collect();
    assert_eq!(percents, vec![50, 35, 15]);
    assert_eq!(results.winner, Some(candidates[0].id));
    assert_eq!(results.margin, 3);
}

#[test]
fn listing_orders_ongoing_before_upcoming_before_completed() {
    let dir = tempfile::tempdir().unwrap();
    let f = fixture(&dir);
    let now = Timestamp::now();
    let state = &f.node.state;

    let mut ids = Vec::new();
    for offset in [100u64, 200, 300] {
        ids.push(
            state
                .elections
                .create(
                    f.club,
                    f.position,
                    now.plus_secs(offset),
                    now.plus_secs(offset + 50),
                    &f.head,
                    now,
                )
                .unwrap()
                .id,
        );
    }
    state
        .elections
        .set_status(ids[2], ElectionStatus::Ongoing, &f.head)
        .unwrap();
    state
        .elections
        .set_status(ids[0], ElectionStatus::Completed, &f.head)
        .unwrap();

    let listed: Vec<_> = state
        .elections
        .list(ElectionFilter::default())
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
}

#[test]
fn snapshot_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let election_id;
    {
        let f = fixture(&dir);
        let now = Timestamp::now();
        let election = f
            .node
            .state
            .elections
            .create(
                f.club,
                f.position,
                now.plus_secs(10),
                now.plus_secs(20),
                &f.head,
                now,
            )
            .unwrap();
        election_id = election.id;
        let mut node = f.node;
        node.stop().unwrap();
    }

    let reborn = node_in(&dir);
    assert_eq!(reborn.store.user_count().unwrap(), 3);
    let restored = reborn.state.elections.get(election_id).unwrap();
    assert_eq!(restored.status, ElectionStatus::Upcoming);

    // Id allocation continues past restored records.
    let head = Actor::new("HEAD", SiteRole::User);
    let now = Timestamp::now();
    let next = reborn
        .state
        .elections
        .create(
            ClubId::new(1),
            PositionId::new(1),
            now.plus_secs(10),
            now.plus_secs(20),
            &head,
            now,
        )
        .unwrap();
    assert!(next.id > election_id);
}

#[test]
fn seeding_creates_admin_and_catalog_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = NodeConfig {
        data_dir: PathBuf::from(dir.path()),
        enable_sweep: false,
        seed_sample_data: true,
        ..Default::default()
    };
    let mut node = AgoraNode::new(config.clone()).unwrap();
    let admin = node
        .store
        .get_user(&RegNo::from(SEED_ADMIN_REG_NO))
        .unwrap();
    assert_eq!(admin.role, SiteRole::Admin);
    assert!(!node.store.iter_clubs().unwrap().is_empty());
    assert!(!node.store.iter_positions().unwrap().is_empty());
    let clubs_before = node.store.iter_clubs().unwrap().len();
    node.stop().unwrap();

    // A restart restores the snapshot and does not seed again.
    let node = AgoraNode::new(config).unwrap();
    assert_eq!(node.store.iter_clubs().unwrap().len(), clubs_before);
}
