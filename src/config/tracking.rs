//! Tracking settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How edits are gated and how long they stay reversible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSettings {
    /// Document type identifiers whose edits are credited
    /// Default: ["markdown", "plaintext"]
    #[serde(default = "default_tracked_file_types")]
    pub tracked_file_types: Vec<String>,

    /// Seconds during which an undo/delete can cancel a fresh credit
    #[serde(default = "default_undo_grace_period_seconds")]
    pub undo_grace_period_seconds: u64,

    /// Cap applied to each addition before it enters the ledger
    #[serde(default = "default_max_tracked_chars_per_edit")]
    pub max_tracked_chars_per_edit: u64,

    /// How often pending credits are swept into the daily count
    #[serde(default = "default_commit_interval_seconds")]
    pub commit_interval_seconds: u64,
}

fn default_tracked_file_types() -> Vec<String> {
    vec!["markdown".to_string(), "plaintext".to_string()]
}

fn default_undo_grace_period_seconds() -> u64 {
    30
}

fn default_max_tracked_chars_per_edit() -> u64 {
    50
}

fn default_commit_interval_seconds() -> u64 {
    5
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            tracked_file_types: default_tracked_file_types(),
            undo_grace_period_seconds: default_undo_grace_period_seconds(),
            max_tracked_chars_per_edit: default_max_tracked_chars_per_edit(),
            commit_interval_seconds: default_commit_interval_seconds(),
        }
    }
}

impl TrackingSettings {
    pub fn grace_period(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.undo_grace_period_seconds as i64)
    }

    pub fn commit_interval(&self) -> Duration {
        Duration::from_secs(self.commit_interval_seconds.max(1))
    }

    pub fn is_tracked(&self, type_id: &str) -> bool {
        self.tracked_file_types.iter().any(|t| t == type_id)
    }
}
