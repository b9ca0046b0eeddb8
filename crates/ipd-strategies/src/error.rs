//! Error type shared by all policies

/// Errors raised while building or invoking a policy
#[derive(thiserror::Error, Debug)]
pub enum PolicyError {
    #[error("Player slot must be 0 or 1, got {0}")]
    InvalidSlot(usize),
    #[error("Action ordinal must be 0 (Cooperate) or 1 (Defect), got {0}")]
    InvalidAction(u8),
    #[error("Value can't be probability: {0}")]
    NotAProbability(f64),
    #[error("Invalid strategy config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reject anything outside `[0, 1]`, NaN included
pub(crate) fn check_probability(value: f64) -> Result<f64, PolicyError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(PolicyError::NotAProbability(value))
    }
}
