//! Markdown statistics report

use super::{format_thousands, Statistics};
use crate::domain::ChallengeState;

/// Render the full statistics report for `project`
pub fn render_report(project: &str, state: &ChallengeState, stats: &Statistics) -> String {
    let history_log = if stats.is_empty() {
        "No writing history yet.".to_string()
    } else {
        stats.history_log().join("\n")
    };

    format!(
        "# Writer's Crucible Statistics\n\
         \n\
         **Project:** {project}\n\
         **Current Challenge:** {name} ({goal} chars/day)\n\
         \n\
         ---\n\
         \n\
         ## Lifetime Statistics\n\
         - **Total Characters Written:** {total}\n\
         - **Total Writing Days:** {days}\n\
         - **Longest Writing Streak:** {streak} days\n\
         - **Average Characters per Day:** {avg}\n\
         \n\
         ---\n\
         \n\
         ## Daily History\n\
         {history_log}\n",
        name = state.challenge_name,
        goal = format_thousands(state.goal),
        total = format_thousands(stats.total_chars),
        days = stats.total_days,
        streak = stats.streak,
        avg = format_thousands(stats.avg_per_day),
    )
}
