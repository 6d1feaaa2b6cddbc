//! Lifetime statistics derived from history and today's count

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::HistoryEntry;

/// Aggregate writing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_chars: u64,
    /// Days with any accredited writing
    pub total_days: u64,
    /// Longest run of consecutive writing days
    pub streak: u64,
    /// Rounded mean characters per writing day
    pub avg_per_day: u64,
    /// Every day considered, oldest first (today included when non-zero)
    pub days: Vec<HistoryEntry>,
}

impl Statistics {
    /// Pure computation over `history` plus a synthetic entry for `today`
    pub fn calculate(history: &[HistoryEntry], daily_count: u64, today: NaiveDate) -> Self {
        let mut days: Vec<HistoryEntry> = history.iter().copied().filter(|h| h.count > 0).collect();
        if daily_count > 0 {
            // History should never hold today, but don't double count if it does
            days.retain(|h| h.date != today);
            days.push(HistoryEntry {
                date: today,
                count: daily_count,
            });
        }
        days.sort_by_key(|h| h.date);

        let total_chars: u64 = days.iter().map(|h| h.count).sum();
        let total_days = days.len() as u64;
        let avg_per_day = if total_days > 0 {
            (total_chars as f64 / total_days as f64).round() as u64
        } else {
            0
        };

        Self {
            total_chars,
            total_days,
            streak: longest_streak(&days),
            avg_per_day,
            days,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// `- **YYYY-MM-DD:** N characters`, newest first
    pub fn history_log(&self) -> Vec<String> {
        self.days
            .iter()
            .rev()
            .map(|h| format!("- **{}:** {} characters", h.date, super::format_thousands(h.count)))
            .collect()
    }
}

/// Longest run of dates exactly one day apart in a date-sorted slice
fn longest_streak(days: &[HistoryEntry]) -> u64 {
    if days.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut current = 1;
    for pair in days.windows(2) {
        if (pair[1].date - pair[0].date).num_days() == 1 {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}
