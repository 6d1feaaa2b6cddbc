//! Error types and boundary validation

/// Sanity ceiling for a daily goal (characters/day)
pub const MAX_GOAL: u64 = 1_000_000;

/// Sanity ceiling for a single manual correction
pub const MAX_CORRECTION: u64 = 100_000;

/// Errors surfaced by the library
#[derive(Debug, thiserror::Error)]
pub enum CrucibleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CrucibleError>;

/// Validate a custom goal entered by the user.
pub fn validate_goal(goal: i64) -> Result<u64> {
    if goal <= 0 {
        return Err(CrucibleError::InvalidInput(format!(
            "goal must be positive, got {}",
            goal
        )));
    }
    let goal = goal as u64;
    if goal > MAX_GOAL {
        return Err(CrucibleError::InvalidInput(format!(
            "goal {} exceeds the maximum of {}",
            goal, MAX_GOAL
        )));
    }
    Ok(goal)
}

/// Validate a manual correction against the current daily count.
///
/// Zero is rejected, as is any magnitude above [`MAX_CORRECTION`] or a
/// subtraction larger than what has been accredited today.
pub fn validate_correction(delta: i64, current: u64) -> Result<i64> {
    if delta == 0 {
        return Err(CrucibleError::InvalidInput(
            "correction must be non-zero".to_string(),
        ));
    }
    let magnitude = delta.unsigned_abs();
    if magnitude > MAX_CORRECTION {
        return Err(CrucibleError::InvalidInput(format!(
            "correction of {} exceeds the maximum of {}",
            magnitude, MAX_CORRECTION
        )));
    }
    if delta < 0 && magnitude > current {
        return Err(CrucibleError::InvalidInput(format!(
            "cannot subtract {} from a count of {}",
            magnitude, current
        )));
    }
    Ok(delta)
}
