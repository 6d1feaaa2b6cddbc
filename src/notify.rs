//! User-facing notifications and display projections
//!
//! Both sinks are fire-and-forget: the tracker never waits on them and never
//! reads anything back.

use std::sync::{Arc, Mutex};

use crate::domain::HistoryEntry;
use crate::stats::{format_thousands, ChartData, StatusView};

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The day rolled over; `archived` is the entry written to history, if any
    NewDay { archived: Option<HistoryEntry> },
    GoalReached { goal: u64, count: u64 },
    TrackingPaused,
    TrackingResumed,
    /// Manual credit or correction applied
    Corrected { delta: i64, count: u64 },
    ChallengeStarted { name: String, goal: u64 },
    Reset,
    Warning(String),
}

impl Notification {
    pub fn message(&self) -> String {
        match self {
            Self::NewDay { .. } => {
                "A new day has begun! Your character count has been reset.".to_string()
            }
            Self::GoalReached { goal, count } => format!(
                "Goal reached: {} / {} characters today!",
                format_thousands(*count),
                format_thousands(*goal)
            ),
            Self::TrackingPaused => "Writing tracking paused.".to_string(),
            Self::TrackingResumed => "Writing tracking resumed.".to_string(),
            Self::Corrected { delta, count } if *delta >= 0 => format!(
                "{} characters added. Today's count: {}",
                format_thousands(delta.unsigned_abs()),
                format_thousands(*count)
            ),
            Self::Corrected { delta, count } => format!(
                "{} characters removed. Today's count: {}",
                format_thousands(delta.unsigned_abs()),
                format_thousands(*count)
            ),
            Self::ChallengeStarted { name, .. } => {
                format!("Challenge Started: {}. Good luck!", name)
            }
            Self::Reset => "Writer's Crucible data has been reset.".to_string(),
            Self::Warning(message) => message.clone(),
        }
    }
}

/// Receives notifications for the user
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Receives read-only projections of the tracker state
pub trait DisplaySink: Send + Sync {
    fn show_status(&self, status: &StatusView);

    fn show_chart(&self, _chart: &ChartData) {}
}

/// Logs notifications through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::Warning(message) => tracing::warn!("{}", message),
            other => tracing::info!("{}", other.message()),
        }
    }
}

/// Stores notifications in memory; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    inner: Arc<Mutex<Vec<Notification>>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.inner.lock().expect("notifier lock poisoned").clone()
    }

    /// Drain everything collected so far
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.inner.lock().expect("notifier lock poisoned"))
    }

    pub fn count_where(&self, f: impl Fn(&Notification) -> bool) -> usize {
        self.all().iter().filter(|n| f(n)).count()
    }
}

impl NotificationSink for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        self.inner
            .lock()
            .expect("notifier lock poisoned")
            .push(notification);
    }
}

/// Display sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show_status(&self, _status: &StatusView) {}
}

/// Keeps the latest status and chart pushed to it
#[derive(Debug, Clone, Default)]
pub struct LatestDisplay {
    status: Arc<Mutex<Option<StatusView>>>,
    chart: Arc<Mutex<Option<ChartData>>>,
}

impl LatestDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<StatusView> {
        self.status.lock().expect("display lock poisoned").clone()
    }

    pub fn chart(&self) -> Option<ChartData> {
        self.chart.lock().expect("display lock poisoned").clone()
    }
}

impl DisplaySink for LatestDisplay {
    fn show_status(&self, status: &StatusView) {
        *self.status.lock().expect("display lock poisoned") = Some(status.clone());
    }

    fn show_chart(&self, chart: &ChartData) {
        *self.chart.lock().expect("display lock poisoned") = Some(chart.clone());
    }
}
