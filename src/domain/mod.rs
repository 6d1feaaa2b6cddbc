//! Core domain types for Writer's Crucible

mod challenge;
mod edit;
mod state;

pub use challenge::{
    ChallengePreset, CITATION_CREDIT, CRUCIBLE_GOAL, PRESETS, REVISION_CREDIT,
};
pub use edit::{classify, classify_length_delta, EditEvent, EditKind, TextChange};
pub use state::{ChallengeState, HistoryEntry, PendingChar, NO_CHALLENGE_NAME};
