//! Pending ledger: credits that an undo can still take back
//!
//! Entries are kept oldest first. New credits are appended at the tail and
//! reversals consume from the tail, so only the newest, still-young credits
//! can ever be cancelled.

use chrono::{DateTime, Duration, Utc};

use crate::domain::PendingChar;

/// Result of splitting the ledger at the grace-period cutoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sweep {
    /// Sum of entries old enough to become permanent
    pub ready: u64,
    /// Entries still inside their grace period, original order
    pub remaining: Vec<PendingChar>,
}

/// Append a credit of `chars`, capped at `cap`. Returns the amount recorded.
pub fn append(entries: &mut Vec<PendingChar>, chars: u64, cap: u64, now: DateTime<Utc>) -> u64 {
    let count = chars.min(cap);
    if count == 0 {
        return 0;
    }
    // Keep timestamps non-decreasing even if the clock steps backwards
    let timestamp = entries
        .last()
        .map_or(now, |last| last.timestamp.max(now));
    entries.push(PendingChar { count, timestamp });
    count
}

/// Cancel up to `magnitude` characters from the newest entries.
///
/// Walks backwards from the tail and stops at the first entry whose age has
/// reached `grace`. Returns how much was actually reversed; the rest of the
/// deletion is unmatched and never touches committed characters.
pub fn reverse(
    entries: &mut Vec<PendingChar>,
    magnitude: u64,
    now: DateTime<Utc>,
    grace: Duration,
) -> u64 {
    let mut remaining = magnitude;
    while remaining > 0 {
        let Some(last) = entries.last_mut() else {
            break;
        };
        if now - last.timestamp >= grace {
            break;
        }
        let taken = remaining.min(last.count);
        last.count -= taken;
        remaining -= taken;
        if last.count == 0 {
            entries.pop();
        }
    }
    magnitude - remaining
}

/// Partition entries into ready (age >= grace) and still pending
pub fn sweep_ready(entries: &[PendingChar], now: DateTime<Utc>, grace: Duration) -> Sweep {
    let (ready, remaining): (Vec<PendingChar>, Vec<PendingChar>) = entries
        .iter()
        .partition(|entry| now - entry.timestamp >= grace);
    Sweep {
        ready: ready.iter().map(|entry| entry.count).sum(),
        remaining,
    }
}
