//! Pending ledger behavior through the session

use crate::common::Harness;

#[test]
fn test_additions_commit_capped_totals() {
    let mut h = Harness::new();
    for n in [10, 200, 30, 50, 75] {
        h.type_chars(n);
        h.advance(1);
    }
    assert_eq!(h.stored().pending_total(), 10 + 50 + 30 + 50 + 50);

    h.advance(30);
    assert_eq!(h.session.commit_ready(), 190);

    let state = h.stored();
    assert_eq!(state.daily_count, 190);
    assert!(state.pending_chars.is_empty());
}

#[test]
fn test_paste_is_capped_in_ledger() {
    let mut h = Harness::new();
    let outcome = h.type_chars(200);

    assert_eq!(outcome.credited, 50);
    let state = h.stored();
    assert_eq!(state.pending_chars.len(), 1);
    assert_eq!(state.pending_chars[0].count, 50);
}

#[test]
fn test_immediate_delete_cancels_addition() {
    let mut h = Harness::new();
    h.type_chars(40);
    h.advance(2);

    let outcome = h.delete_chars(40);
    assert_eq!(outcome.reversed, 40);
    assert_eq!(h.stored().pending_total(), 0);

    h.advance(60);
    assert_eq!(h.session.commit_ready(), 0);
    assert_eq!(h.session.state().daily_count, 0);
}

#[test]
fn test_oversized_delete_is_unmatched() {
    let mut h = Harness::new();
    h.type_chars(25);

    let outcome = h.delete_chars(100);
    assert_eq!(outcome.reversed, 25);
    assert_eq!(outcome.unmatched, 75);
    assert_eq!(h.stored().pending_total(), 0);
}

#[test]
fn test_partial_undo_leaves_remainder() {
    let mut h = Harness::new();
    h.type_chars(30);
    h.type_chars(5);
    h.delete_chars(8);

    assert_eq!(h.stored().pending_total(), 27);

    h.advance(30);
    h.session.commit_ready();
    assert_eq!(h.stored().daily_count, 27);
}

#[test]
fn test_committed_characters_are_final() {
    let mut h = Harness::new();
    h.type_chars(30);
    h.advance(30);
    assert_eq!(h.session.commit_ready(), 30);

    let outcome = h.delete_chars(30);
    assert_eq!(outcome.reversed, 0);
    assert_eq!(outcome.unmatched, 30);
    assert_eq!(h.stored().daily_count, 30);
}

#[test]
fn test_delete_cannot_reach_past_expired_entry() {
    let mut h = Harness::new();
    h.type_chars(20);
    h.advance(35);
    h.type_chars(5);

    // The first credit is past its grace period but not yet swept
    let outcome = h.delete_chars(15);
    assert_eq!(outcome.reversed, 5);
    assert_eq!(h.stored().pending_total(), 20);
}

#[test]
fn test_sweep_only_commits_old_entries() {
    let mut h = Harness::new();
    h.type_chars(10);
    h.advance(20);
    h.type_chars(15);
    h.advance(10);

    assert_eq!(h.session.commit_ready(), 10);
    let state = h.stored();
    assert_eq!(state.daily_count, 10);
    assert_eq!(state.pending_total(), 15);
    assert_eq!(h.session.status().display_count, 25);
}

#[test]
fn test_multi_range_event_processed_in_order() {
    use crucible::domain::{EditEvent, TextChange};

    let mut h = Harness::new();
    let event = EditEvent::new(
        crate::common::DOC,
        "markdown",
        vec![
            TextChange::insert(12),
            TextChange::delete(4),
            TextChange::replace(9, 3),
            TextChange::replace(1, 7),
        ],
    );
    let outcome = h.session.handle_change(&event, 10);

    assert_eq!(outcome.credited, 18);
    assert_eq!(outcome.reversed, 4);
    assert_eq!(h.stored().pending_total(), 14);
}

#[test]
fn test_grace_period_change_applies_immediately() {
    let mut h = Harness::new();
    h.type_chars(10);
    h.advance(6);
    assert_eq!(h.session.commit_ready(), 0);

    h.config.update(|s| s.undo_grace_period_seconds = 5);
    assert_eq!(h.session.commit_ready(), 10);
}

#[test]
fn test_cap_change_applies_immediately() {
    let mut h = Harness::new();
    h.config.update(|s| s.max_tracked_chars_per_edit = 500);
    assert_eq!(h.type_chars(200).credited, 200);
}

#[test]
fn test_status_pushed_to_display() {
    let mut h = Harness::new();
    h.type_chars(12);

    let status = h.display.status().unwrap();
    assert_eq!(status.pending_total, 12);
    assert_eq!(status.display_count, 12);
    assert_eq!(status.daily_count, 0);
}

#[test]
fn test_status_pushed_for_edit_that_changes_nothing() {
    use std::sync::Arc;

    use crucible::clock::ManualClock;
    use crucible::config::SharedConfig;
    use crucible::domain::{EditEvent, TextChange};
    use crucible::notify::LatestDisplay;
    use crucible::store::MemoryStore;
    use crucible::tracker::TrackerSession;

    let display = LatestDisplay::new();
    let clock = Arc::new(ManualClock::at(crate::common::start_day(), 10, 0, 0));
    let mut session = TrackerSession::new(MemoryStore::new(), clock, SharedConfig::default())
        .with_display(display.clone());

    // A shrinking replacement neither credits nor reverses
    let event = EditEvent::new("notes.md", "markdown", vec![TextChange::replace(2, 5)]);
    let outcome = session.handle_change(&event, 97);
    assert_eq!(outcome.credited, 0);
    assert_eq!(outcome.reversed, 0);

    let status = display.status().unwrap();
    assert_eq!(status.display_count, 0);
}
