//! Challenge commands: start, presets, reset

use anyhow::{bail, Result};
use std::path::Path;

use crucible::domain::{ChallengePreset, PRESETS};
use crucible::error::validate_goal;

use super::open_session;

/// List the built-in challenges
pub fn presets_command() {
    println!("Challenges:\n");
    for preset in PRESETS {
        println!("  {:<10} {:<26} {}", preset.key, preset.label, preset.description);
    }
}

/// Start a preset or custom challenge
pub async fn start_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    preset: Option<String>,
    goal: Option<i64>,
    name: Option<String>,
) -> Result<()> {
    let (label, target) = match (preset, goal) {
        (Some(key), None) => {
            let Some(preset) = ChallengePreset::find(&key) else {
                bail!("Unknown challenge: {} (see `crucible presets`)", key);
            };
            (name.unwrap_or_else(|| preset.label.to_string()), preset.target)
        }
        (None, Some(goal)) => {
            let goal = validate_goal(goal)?;
            (name.unwrap_or_else(|| "Custom Challenge".to_string()), goal)
        }
        _ => bail!("Pass exactly one of --preset or --goal"),
    };

    let mut cli = open_session(work_dir, config_path);
    let status = cli.session.start_challenge(&label, target);
    println!("Challenge Started: {}. Good luck!", label);
    println!("{}", status.label());

    Ok(())
}

/// Discard all challenge data for the current scope
pub async fn reset_command(work_dir: &Path, config_path: Option<&Path>, yes: bool) -> Result<()> {
    if !yes {
        bail!("This deletes all challenge data for this project. Re-run with --yes to confirm.");
    }

    let mut cli = open_session(work_dir, config_path);
    cli.session.reset();
    println!("Writer's Crucible data has been reset: {}", cli.scope.state_path().display());

    Ok(())
}
