//! Suggested reward computation for quest authoring tools.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Suggested experience reward for a quest aimed at the given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEstimate {
    pub level: u32,
    pub experience: u64,
}

/// Estimate a fair experience reward for a quest targeting `level`.
///
/// The curve is `50 * level^1.5`, rounded to the nearest integer, so
/// rewards grow faster than the linear leveling thresholds.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `level` is zero.
pub fn estimate_reward(level: u32) -> Result<RewardEstimate, DomainError> {
    if level == 0 {
        return Err(DomainError::validation("Level must be at least 1"));
    }
    let experience = (50.0 * f64::from(level).powf(1.5)).round() as u64;
    Ok(RewardEstimate { level, experience })
}
