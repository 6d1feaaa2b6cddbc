//! Read-only projections for the status indicator and charts

use serde::Serialize;

use super::format_thousands;
use crate::domain::{ChallengeState, HistoryEntry};

/// What the status indicator renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    /// Committed plus pending
    pub display_count: u64,
    pub pending_total: u64,
    pub daily_count: u64,
    pub goal: u64,
    pub challenge_name: String,
    pub paused: bool,
}

impl StatusView {
    pub fn from_state(state: &ChallengeState) -> Self {
        Self {
            display_count: state.display_count(),
            pending_total: state.pending_total(),
            daily_count: state.daily_count,
            goal: state.goal,
            challenge_name: state.challenge_name.clone(),
            paused: state.tracking_paused,
        }
    }

    /// Progress towards the goal, capped at 100
    pub fn percent(&self) -> u64 {
        if self.goal == 0 {
            return 0;
        }
        (self.display_count.saturating_mul(100) / self.goal).min(100)
    }

    pub fn goal_met(&self) -> bool {
        self.goal > 0 && self.display_count >= self.goal
    }

    /// Status bar text
    pub fn label(&self) -> String {
        if self.goal == 0 {
            return "Writer's Crucible".to_string();
        }
        let mut label = format!(
            "{} / {} ({}%)",
            format_thousands(self.display_count),
            format_thousands(self.goal),
            self.percent()
        );
        if self.paused {
            label.push_str(" [paused]");
        }
        label
    }

    /// Hover text for the status bar item
    pub fn tooltip(&self, project: &str) -> String {
        if self.goal == 0 {
            return "No writing challenge is active for this project.".to_string();
        }
        format!(
            "Project: {}\nToday's Progress: {} / {}",
            project,
            format_thousands(self.display_count),
            format_thousands(self.goal)
        )
    }
}

/// Data backing the progress chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub history: Vec<HistoryEntry>,
    pub daily_count: u64,
    pub goal: u64,
}

impl ChartData {
    pub fn from_state(state: &ChallengeState) -> Self {
        let mut history = state.history.clone();
        history.sort_by_key(|h| h.date);
        Self {
            history,
            daily_count: state.daily_count,
            goal: state.goal,
        }
    }
}
