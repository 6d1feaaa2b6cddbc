//! Stats command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::open_session;

/// Print (or write) the markdown statistics report, or the chart data as JSON
pub async fn stats_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    output: Option<PathBuf>,
    chart: bool,
) -> Result<()> {
    let cli = open_session(work_dir, config_path);

    let content = if chart {
        serde_json::to_string_pretty(&cli.session.chart_data())?
    } else {
        cli.session.report(&cli.scope.name())
    };

    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("Wrote: {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
