//! Where the challenge state lives: per project or global

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Directory name holding per-project state
pub const PROJECT_DIR: &str = ".crucible";

const STATE_FILE: &str = "state.json";

/// Which challenge record an editing session works against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateScope {
    /// `<root>/.crucible/state.json`
    Project(PathBuf),
    /// `~/.crucible/state.json`
    Global,
}

impl StateScope {
    /// Project scope if `dir` has a `.crucible` directory, global otherwise
    pub fn detect(dir: &Path) -> Self {
        if dir.join(PROJECT_DIR).is_dir() {
            Self::Project(dir.to_path_buf())
        } else {
            Self::Global
        }
    }

    pub fn state_path(&self) -> PathBuf {
        match self {
            Self::Project(root) => root.join(PROJECT_DIR).join(STATE_FILE),
            Self::Global => Config::global_config_dir().join(STATE_FILE),
        }
    }

    /// Display name used in reports
    pub fn name(&self) -> String {
        match self {
            Self::Project(root) => root
                .canonicalize()
                .unwrap_or_else(|_| root.clone())
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| root.display().to_string()),
            Self::Global => "Global (No Project Folder)".to_string(),
        }
    }
}
