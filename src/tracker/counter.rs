//! Daily counter: rollover, credits and goal crossing

use chrono::NaiveDate;

use crate::domain::{ChallengeState, HistoryEntry};
use crate::{CrucibleError, Result};

/// What happened when the live day was checked against `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollover {
    /// History entry written for yesterday, if the old day had activity
    pub archived: Option<HistoryEntry>,
}

/// Effect of adding to (or subtracting from) the daily count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreditOutcome {
    pub rollover: Option<Rollover>,
    /// The count moved from below the goal to at/above it
    pub goal_reached: bool,
    pub daily_count: u64,
}

/// Archive the live day and start `today` if the date changed.
///
/// Only the day immediately before `today` receives the archived count;
/// intermediate skipped days are not backfilled. Returns `None` when
/// `today` is already the live day.
pub fn check_rollover(state: &mut ChallengeState, today: NaiveDate) -> Option<Rollover> {
    if state.last_update_date == today {
        return None;
    }

    let mut archived = None;
    if state.daily_count > 0 {
        let yesterday = today.pred_opt().unwrap_or(today);
        state.upsert_history(yesterday, state.daily_count);
        archived = Some(HistoryEntry {
            date: yesterday,
            count: state.daily_count,
        });
    }

    tracing::info!(
        from = %state.last_update_date,
        to = %today,
        archived = state.daily_count,
        "Day rolled over"
    );
    state.daily_count = 0;
    state.last_update_date = today;
    Some(Rollover { archived })
}

/// Add `amount` to today's count, rolling over first.
pub fn apply_credit(state: &mut ChallengeState, amount: u64, today: NaiveDate) -> CreditOutcome {
    let rollover = check_rollover(state, today);
    let previous = state.daily_count;
    state.daily_count = previous.saturating_add(amount);
    CreditOutcome {
        rollover,
        goal_reached: crossed_goal(state.goal, previous, state.daily_count),
        daily_count: state.daily_count,
    }
}

/// Directly add to or subtract from today's count, bypassing the ledger.
///
/// Subtractions larger than the current count are rejected.
pub fn manual_adjust(state: &mut ChallengeState, delta: i64, today: NaiveDate) -> Result<CreditOutcome> {
    if delta >= 0 {
        return Ok(apply_credit(state, delta as u64, today));
    }

    let rollover = check_rollover(state, today);
    let magnitude = delta.unsigned_abs();
    if magnitude > state.daily_count {
        return Err(CrucibleError::InvalidInput(format!(
            "cannot subtract {} from a count of {}",
            magnitude, state.daily_count
        )));
    }
    state.daily_count -= magnitude;
    Ok(CreditOutcome {
        rollover,
        goal_reached: false,
        daily_count: state.daily_count,
    })
}

fn crossed_goal(goal: u64, before: u64, after: u64) -> bool {
    goal > 0 && before < goal && goal <= after
}
