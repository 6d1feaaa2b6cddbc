//! Gate deciding whether an edit earns credit at all

use crate::config::TrackingSettings;

/// Outcome of the tracking gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Track,
    Paused,
    UntrackedType,
}

impl Gate {
    /// Evaluate the gate for a document of type `type_id`
    pub fn evaluate(paused: bool, settings: &TrackingSettings, type_id: &str) -> Self {
        if paused {
            Self::Paused
        } else if !settings.is_tracked(type_id) {
            Self::UntrackedType
        } else {
            Self::Track
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Track)
    }
}
