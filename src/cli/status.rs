//! Status command implementation

use anyhow::Result;
use std::path::Path;

use crucible::stats::format_thousands;

use super::open_session;

/// Print today's progress line
pub async fn status_command(work_dir: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let cli = open_session(work_dir, config_path);
    let status = cli.session.status();

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", status.label());
    if status.goal > 0 {
        for line in status.tooltip(&cli.scope.name()).lines() {
            println!("  {}", line);
        }
        println!("  Challenge: {}", status.challenge_name);
        println!(
            "  Committed: {}  Pending: {}",
            format_thousands(status.daily_count),
            format_thousands(status.pending_total)
        );
    }
    if status.paused {
        println!("  Tracking is paused.");
    }
    println!("  Record: {}", cli.scope.state_path().display());

    Ok(())
}
