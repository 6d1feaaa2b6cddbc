//! Challenge commands, manual credits, statistics

use crucible::domain::{ChallengePreset, ChallengeState, HistoryEntry};
use crucible::notify::Notification;
use crucible::CrucibleError;

use crate::common::{date, start_day, Harness, DOC};

#[test]
fn test_start_preset_resets_today() {
    let mut h = Harness::new();
    h.session.correct(400).unwrap();
    h.type_chars(20);

    let status = h.session.start_preset(ChallengePreset::find("kilo").unwrap());
    assert_eq!(status.goal, 1000);
    assert_eq!(status.challenge_name, "Standard Kilo-Challenge");
    assert_eq!(status.display_count, 0);
    assert_eq!(status.label(), "0 / 1,000 (0%)");
    assert!(h.notifier.all().contains(&Notification::ChallengeStarted {
        name: "Standard Kilo-Challenge".to_string(),
        goal: 1000
    }));
}

#[test]
fn test_correction_bounds() {
    let mut h = Harness::new();
    assert_eq!(h.session.correct(120).unwrap(), 120);
    assert_eq!(h.session.correct(-20).unwrap(), 100);

    let err = h.session.correct(-101).unwrap_err();
    assert!(matches!(err, CrucibleError::InvalidInput(_)));
    assert!(h.session.correct(0).is_err());
    assert_eq!(h.stored().daily_count, 100);
}

#[test]
fn test_revision_credit_reaches_crucible_goal() {
    let mut state = ChallengeState::new(start_day());
    state.goal = 3000;
    state.daily_count = 2100;
    let mut h = Harness::with_state(state);

    assert_eq!(h.session.credit_revision().unwrap(), 3100);
    assert_eq!(h.goal_notifications(), 1);
    assert_eq!(
        h.notifier
            .count_where(|n| matches!(n, Notification::Warning(_))),
        0
    );
}

#[test]
fn test_reset_discards_everything() {
    let mut h = Harness::new();
    h.session.start_challenge("Custom", 750);
    h.type_chars(30);
    h.session.correct(10).unwrap();

    h.session.reset();
    assert!(h.store.snapshot().is_none());
    assert_eq!(h.session.baseline(DOC), None);

    let status = h.session.status();
    assert_eq!(status.goal, 0);
    assert_eq!(status.display_count, 0);
    assert_eq!(status.label(), "Writer's Crucible");
}

#[test]
fn test_statistics_include_today() {
    let mut state = ChallengeState::new(start_day());
    state.history = vec![
        HistoryEntry { date: date(2024, 1, 1), count: 100 },
        HistoryEntry { date: date(2024, 1, 2), count: 200 },
        HistoryEntry { date: date(2024, 1, 4), count: 50 },
    ];
    let mut h = Harness::with_state(state);

    let stats = h.session.statistics();
    assert_eq!((stats.streak, stats.total_days, stats.total_chars, stats.avg_per_day), (2, 3, 350, 117));

    h.session.correct(50).unwrap();
    let stats = h.session.statistics();
    assert_eq!(stats.total_days, 4);
    assert_eq!(stats.total_chars, 400);
    assert_eq!(stats.avg_per_day, 100);
}

#[test]
fn test_report_and_chart() {
    let mut state = ChallengeState::new(start_day());
    state.goal = 500;
    state.challenge_name = "Micro-Sprint".to_string();
    state.daily_count = 75;
    state.history = vec![HistoryEntry { date: date(2024, 3, 14), count: 1200 }];
    let h = Harness::with_state(state);

    let report = h.session.report("memoir");
    assert!(report.contains("**Project:** memoir"));
    assert!(report.contains("- **2024-03-15:** 75 characters"));
    assert!(report.contains("- **2024-03-14:** 1,200 characters"));

    let chart = h.session.show_chart();
    assert_eq!(chart.daily_count, 75);
    assert_eq!(chart.goal, 500);
    assert_eq!(h.display.chart(), Some(chart));
}
