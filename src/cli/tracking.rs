//! Pause and resume commands

use anyhow::Result;
use std::path::Path;

use super::open_session;

pub async fn set_paused_command(work_dir: &Path, config_path: Option<&Path>, paused: bool) -> Result<()> {
    let mut cli = open_session(work_dir, config_path);
    if cli.session.set_paused(paused) {
        println!("Tracking paused.");
    } else {
        println!("Tracking resumed.");
    }

    Ok(())
}
