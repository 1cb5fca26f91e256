//! Leveling curve and experience application.
//!
//! Experience accumulates per level. When the running total reaches the
//! threshold for the current level, the surplus carries into the next
//! level, so a single large grant can trigger several level-ups.

use serde::{Deserialize, Serialize};

/// Experience required to advance from `level` to `level + 1`.
///
/// The curve is linear: level 1 needs 200, level 4 needs 500.
pub fn exp_for_next_level(level: u32) -> u64 {
    u64::from(level + 1) * 100
}

/// Result of applying an experience grant to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceGain {
    /// Level after the grant was applied
    pub new_level: u32,
    /// Experience within the new level (surplus past the last threshold)
    pub new_experience: u64,
    /// Number of thresholds crossed by this grant
    pub level_ups: u32,
}

impl ExperienceGain {
    /// True when at least one level-up occurred.
    pub fn leveled_up(&self) -> bool {
        self.level_ups > 0
    }
}

/// Apply an experience grant, carrying surplus across level thresholds.
pub fn apply_experience(level: u32, experience: u64, amount: u64) -> ExperienceGain {
    let mut level = level;
    let mut experience = experience + amount;
    let mut level_ups = 0;

    while experience >= exp_for_next_level(level) {
        experience -= exp_for_next_level(level);
        level += 1;
        level_ups += 1;
    }

    ExperienceGain {
        new_level: level,
        new_experience: experience,
        level_ups,
    }
}

/// Progress snapshot toward the next level, for profile views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub experience: u64,
    pub exp_for_next_level: u64,
    /// Experience still missing before the next threshold
    pub exp_needed: u64,
    /// Rounded percentage of the way to the next threshold, clamped to [0, 100]
    pub progress_percentage: u32,
}

impl LevelProgress {
    pub fn for_player(level: u32, experience: u64) -> Self {
        let threshold = exp_for_next_level(level);
        let raw = (experience as f64 / threshold as f64) * 100.0;
        Self {
            level,
            experience,
            exp_for_next_level: threshold,
            exp_needed: threshold.saturating_sub(experience),
            progress_percentage: raw.round().clamp(0.0, 100.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_for_level_one_is_200() {
        assert_eq!(exp_for_next_level(1), 200);
    }

    #[test]
    fn threshold_for_level_four_is_500() {
        assert_eq!(exp_for_next_level(4), 500);
    }

    #[test]
    fn grant_below_threshold_accumulates() {
        let gain = apply_experience(1, 0, 150);
        assert_eq!(gain.new_level, 1);
        assert_eq!(gain.new_experience, 150);
        assert_eq!(gain.level_ups, 0);
        assert!(!gain.leveled_up());
    }

    #[test]
    fn surplus_carries_into_next_level() {
        // 250 against a 200 threshold: one level-up, 50 carried over
        let gain = apply_experience(1, 0, 250);
        assert_eq!(gain.new_level, 2);
        assert_eq!(gain.new_experience, 50);
        assert_eq!(gain.level_ups, 1);
    }

    #[test]
    fn large_grant_crosses_multiple_thresholds() {
        // From level 1: 200 to reach 2, 300 to reach 3, 400 to reach 4
        let gain = apply_experience(1, 0, 950);
        assert_eq!(gain.new_level, 4);
        assert_eq!(gain.new_experience, 50);
        assert_eq!(gain.level_ups, 3);
    }

    #[test]
    fn exact_threshold_levels_up_with_zero_surplus() {
        let gain = apply_experience(1, 0, 200);
        assert_eq!(gain.new_level, 2);
        assert_eq!(gain.new_experience, 0);
        assert_eq!(gain.level_ups, 1);
    }

    #[test]
    fn existing_experience_counts_toward_threshold() {
        let gain = apply_experience(1, 180, 30);
        assert_eq!(gain.new_level, 2);
        assert_eq!(gain.new_experience, 10);
    }

    #[test]
    fn progress_snapshot_derives_fields() {
        let progress = LevelProgress::for_player(1, 100);
        assert_eq!(progress.exp_for_next_level, 200);
        assert_eq!(progress.exp_needed, 100);
        assert_eq!(progress.progress_percentage, 50);
    }

    #[test]
    fn progress_percentage_rounds_and_clamps() {
        let third = LevelProgress::for_player(2, 100);
        assert_eq!(third.exp_for_next_level, 300);
        assert_eq!(third.progress_percentage, 33);

        let zero = LevelProgress::for_player(3, 0);
        assert_eq!(zero.progress_percentage, 0);
        assert_eq!(zero.exp_needed, 400);
    }
}
