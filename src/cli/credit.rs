//! Manual credit and correction commands

use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

use crucible::stats::format_thousands;

use super::open_session;

/// Fixed credits for work that isn't typed
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CreditKind {
    /// 30 minutes of revision (1,000 characters)
    Revision,
    /// One citation (50 characters)
    Citation,
}

pub async fn credit_command(work_dir: &Path, config_path: Option<&Path>, kind: CreditKind) -> Result<()> {
    let mut cli = open_session(work_dir, config_path);
    let count = match kind {
        CreditKind::Revision => cli.session.credit_revision()?,
        CreditKind::Citation => cli.session.credit_citation()?,
    };
    println!("Today's count: {}", format_thousands(count));

    Ok(())
}

/// Add (positive) or subtract (negative) characters from today's count
pub async fn correct_command(work_dir: &Path, config_path: Option<&Path>, delta: i64) -> Result<()> {
    let mut cli = open_session(work_dir, config_path);
    let count = cli.session.correct(delta)?;
    println!("Today's count: {}", format_thousands(count));

    Ok(())
}
