//! Built-in daily challenges

/// A selectable daily challenge
#[derive(Debug, Clone)]
pub struct ChallengePreset {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub target: u64,
}

/// Goal the revision and citation credits are meant for
pub const CRUCIBLE_GOAL: u64 = 3000;

/// Characters credited for 30 minutes of revision work
pub const REVISION_CREDIT: u64 = 1000;

/// Characters credited for one citation
pub const CITATION_CREDIT: u64 = 50;

/// All presets, smallest goal first
pub static PRESETS: &[ChallengePreset] = &[
    ChallengePreset {
        key: "micro",
        label: "Micro-Sprint",
        description: "500 characters/day",
        target: 500,
    },
    ChallengePreset {
        key: "kilo",
        label: "Standard Kilo-Challenge",
        description: "1,000 characters/day",
        target: 1000,
    },
    ChallengePreset {
        key: "marathon",
        label: "Marathoner's Pace",
        description: "2,000 characters/day",
        target: 2000,
    },
    ChallengePreset {
        key: "crucible",
        label: "3K Crucible",
        description: "3,000 characters/day",
        target: CRUCIBLE_GOAL,
    },
];

impl ChallengePreset {
    /// Look up a preset by key or label (case-insensitive)
    pub fn find(name: &str) -> Option<&'static ChallengePreset> {
        let name = name.trim();
        PRESETS
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(name) || p.label.eq_ignore_ascii_case(name))
    }
}
