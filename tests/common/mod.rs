//! Shared fixtures for tracker integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use crucible::clock::{Clock, ManualClock};
use crucible::config::SharedConfig;
use crucible::domain::{ChallengeState, EditEvent, TextChange};
use crucible::notify::{CollectingNotifier, LatestDisplay, Notification};
use crucible::store::MemoryStore;
use crucible::tracker::{EditOutcome, SharedSession, TrackerSession};

pub const DOC: &str = "chapter-01.md";

pub fn start_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A session on synthetic time with observable collaborators
pub struct Harness {
    pub session: TrackerSession,
    pub clock: Arc<ManualClock>,
    pub store: MemoryStore,
    pub config: SharedConfig,
    pub notifier: CollectingNotifier,
    pub display: LatestDisplay,
    pub doc_len: usize,
}

impl Harness {
    /// Fresh session at 10:00 on the start day
    pub fn new() -> Self {
        Self::build(MemoryStore::new(), ManualClock::at(start_day(), 10, 0, 0))
    }

    /// Session over an existing record
    pub fn with_state(state: ChallengeState) -> Self {
        Self::build(MemoryStore::with_state(state), ManualClock::at(start_day(), 10, 0, 0))
    }

    pub fn at(state: ChallengeState, clock: ManualClock) -> Self {
        Self::build(MemoryStore::with_state(state), clock)
    }

    fn build(store: MemoryStore, clock: ManualClock) -> Self {
        let clock = Arc::new(clock);
        let config = SharedConfig::default();
        let notifier = CollectingNotifier::new();
        let display = LatestDisplay::new();
        let mut session = TrackerSession::new(store.clone(), clock.clone(), config.clone())
            .with_notifier(notifier.clone())
            .with_display(display.clone());
        session.observe_document(DOC, 0);
        Self {
            session,
            clock,
            store,
            config,
            notifier,
            display,
            doc_len: 0,
        }
    }

    /// Type `n` characters into the tracked document
    pub fn type_chars(&mut self, n: usize) -> EditOutcome {
        self.doc_len += n;
        let event = EditEvent::new(DOC, "markdown", vec![TextChange::insert(n)]);
        self.session.handle_change(&event, self.doc_len)
    }

    /// Delete `n` characters from the tracked document
    pub fn delete_chars(&mut self, n: usize) -> EditOutcome {
        self.doc_len = self.doc_len.saturating_sub(n);
        let event = EditEvent::new(DOC, "markdown", vec![TextChange::delete(n)]);
        self.session.handle_change(&event, self.doc_len)
    }

    pub fn advance(&self, secs: i64) {
        self.clock.advance_secs(secs);
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Stored record as the host would read it
    pub fn stored(&self) -> ChallengeState {
        self.store.snapshot().expect("state should have been saved")
    }

    pub fn goal_notifications(&self) -> usize {
        self.notifier
            .count_where(|n| matches!(n, Notification::GoalReached { .. }))
    }

    pub fn new_day_notifications(&self) -> usize {
        self.notifier
            .count_where(|n| matches!(n, Notification::NewDay { .. }))
    }
}

/// Shared session for scheduler tests
pub fn shared_session() -> (SharedSession, Arc<ManualClock>, MemoryStore) {
    let clock = Arc::new(ManualClock::at(start_day(), 10, 0, 0));
    let store = MemoryStore::new();
    let session = TrackerSession::new(store.clone(), clock.clone(), SharedConfig::default());
    (session.into_shared(), clock, store)
}

pub fn typed(n: usize) -> EditEvent {
    EditEvent::new(DOC, "markdown", vec![TextChange::insert(n)])
}
