use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Label shown while no challenge has been started
pub const NO_CHALLENGE_NAME: &str = "No Challenge Set";

/// Archived total for one past writing day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub count: u64,
}

/// A credit that can still be rolled back by an undo/delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChar {
    pub count: u64,
    pub timestamp: DateTime<Utc>,
}

/// The whole persisted challenge record
///
/// Loaded at the start of every operation and written back after every
/// mutation. `daily_count` belongs to `last_update_date` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeState {
    /// Target characters per day (0 = no active challenge)
    pub goal: u64,
    pub challenge_name: String,
    /// Permanently accredited characters for `last_update_date`
    pub daily_count: u64,
    pub last_update_date: NaiveDate,
    /// One entry per prior day with activity, unique by date
    pub history: Vec<HistoryEntry>,
    /// Not yet permanent credits, oldest first
    pub pending_chars: Vec<PendingChar>,
    pub tracking_paused: bool,
}

impl ChallengeState {
    /// Fresh state for a first load on `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            goal: 0,
            challenge_name: NO_CHALLENGE_NAME.to_string(),
            daily_count: 0,
            last_update_date: today,
            history: Vec::new(),
            pending_chars: Vec::new(),
            tracking_paused: false,
        }
    }

    /// Sum of all credits still inside their grace period
    pub fn pending_total(&self) -> u64 {
        self.pending_chars.iter().map(|p| p.count).sum()
    }

    /// Committed plus pending, what the status indicator shows
    pub fn display_count(&self) -> u64 {
        self.daily_count + self.pending_total()
    }

    pub fn has_goal(&self) -> bool {
        self.goal > 0
    }

    /// Insert or overwrite the entry for `date`, keeping history date-ordered.
    ///
    /// Zero counts are never archived.
    pub fn upsert_history(&mut self, date: NaiveDate, count: u64) {
        if count == 0 {
            return;
        }
        match self.history.iter_mut().find(|h| h.date == date) {
            Some(existing) => existing.count = count,
            None => {
                let idx = self.history.partition_point(|h| h.date < date);
                self.history.insert(idx, HistoryEntry { date, count });
            }
        }
    }

    pub fn history_for(&self, date: NaiveDate) -> Option<u64> {
        self.history.iter().find(|h| h.date == date).map(|h| h.count)
    }
}
