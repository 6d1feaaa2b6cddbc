//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crucible::config::Config;
use crucible::store::PROJECT_DIR;

/// Write a default config file, and optionally mark `work_dir` as a project
pub async fn init_command(
    work_dir: &Path,
    config_path: Option<PathBuf>,
    force: bool,
    project: bool,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        println!(
            "Configuration already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    } else {
        Config::default().save_to_file(&config_path)?;
        println!("Created: {}", config_path.display());
    }

    if project {
        let project_dir = work_dir.join(PROJECT_DIR);
        if project_dir.exists() && !force {
            bail!(
                "Project tracking already enabled: {}\nUse --force to reinitialize.",
                project_dir.display()
            );
        }
        std::fs::create_dir_all(&project_dir).with_context(|| {
            format!("Failed to create project directory: {}", project_dir.display())
        })?;
        println!("Tracking this project in: {}", project_dir.display());
    }

    Ok(())
}
