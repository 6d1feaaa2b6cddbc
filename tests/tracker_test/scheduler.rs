//! Background commit scheduler on virtual time

use std::sync::Arc;
use std::time::Duration;

use crucible::clock::ManualClock;
use crucible::config::SharedConfig;
use crucible::store::MemoryStore;
use crucible::tracker::{CommitScheduler, SharedSession, TrackerSession};

use crate::common::{shared_session, start_day, typed};

fn type_into(session: &SharedSession, n: usize, len: usize) {
    session.lock().unwrap().handle_change(&typed(n), len);
}

fn committed(store: &MemoryStore) -> u64 {
    store.snapshot().map(|s| s.daily_count).unwrap_or(0)
}

fn pending(store: &MemoryStore) -> u64 {
    store.snapshot().map(|s| s.pending_total()).unwrap_or(0)
}

fn settle(clock: &ManualClock, secs: i64) {
    clock.advance_secs(secs);
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_commits_on_interval() {
    let (session, clock, store) = shared_session();
    type_into(&session, 20, 20);

    let scheduler = CommitScheduler::spawn(session.clone(), Duration::from_secs(5));
    assert!(scheduler.is_running());

    // Not yet past the grace period: the tick runs but commits nothing
    tokio::time::sleep(Duration::from_secs(6)).await;
    assert_eq!(committed(&store), 0);
    assert_eq!(pending(&store), 20);

    settle(&clock, 31);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(committed(&store), 20);
    assert_eq!(pending(&store), 0);

    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_edits_interleave_with_sweeps() {
    let (session, clock, store) = shared_session();
    let scheduler = CommitScheduler::spawn(session.clone(), Duration::from_secs(5));

    type_into(&session, 10, 10);
    settle(&clock, 31);
    type_into(&session, 7, 17);
    tokio::time::sleep(Duration::from_secs(6)).await;

    assert_eq!(committed(&store), 10);
    assert_eq!(pending(&store), 7);

    settle(&clock, 31);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(committed(&store), 17);

    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_no_sweeps_after_shutdown() {
    let (session, clock, store) = shared_session();
    let scheduler = CommitScheduler::spawn(session.clone(), Duration::from_secs(5));
    scheduler.shutdown().await;

    type_into(&session, 15, 15);
    settle(&clock, 60);
    tokio::time::sleep(Duration::from_secs(30)).await;

    assert_eq!(committed(&store), 0);
    assert_eq!(pending(&store), 15);
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_task() {
    let (session, clock, store) = shared_session();
    let scheduler = CommitScheduler::spawn(session.clone(), Duration::from_secs(5));
    drop(scheduler);

    type_into(&session, 15, 15);
    settle(&clock, 60);
    tokio::time::sleep(Duration::from_secs(30)).await;

    assert_eq!(committed(&store), 0);
}

#[tokio::test(start_paused = true)]
async fn test_start_uses_configured_interval() {
    let (session, clock, store) = shared_session();
    type_into(&session, 9, 9);
    settle(&clock, 30);

    let scheduler = CommitScheduler::start(session.clone());
    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(committed(&store), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(committed(&store), 9);

    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_started_scheduler_follows_interval_changes() {
    let clock = Arc::new(ManualClock::at(start_day(), 10, 0, 0));
    let store = MemoryStore::new();
    let config = SharedConfig::default();
    let session = TrackerSession::new(store.clone(), clock.clone(), config.clone()).into_shared();

    let scheduler = CommitScheduler::start(session.clone());
    type_into(&session, 9, 9);
    settle(&clock, 31);
    tokio::time::sleep(Duration::from_secs(6)).await;
    assert_eq!(committed(&store), 9);

    // Picked up by the sweep at 10s; the next one is due at 30s
    config.update(|s| s.commit_interval_seconds = 20);
    tokio::time::sleep(Duration::from_secs(5)).await;

    type_into(&session, 4, 13);
    settle(&clock, 31);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(committed(&store), 9);
    assert_eq!(pending(&store), 4);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(committed(&store), 13);

    scheduler.shutdown().await;
}
