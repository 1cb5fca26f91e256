//! Value objects: validated newtypes and pure computations.

pub mod leveling;
pub mod names;
pub mod quantity;
pub mod rewards;

pub use leveling::{apply_experience, exp_for_next_level, ExperienceGain, LevelProgress};
pub use names::{Email, ItemDescription, ItemName, PlayerName, QuestDescription, QuestTitle};
pub use quantity::RemovalOutcome;
pub use rewards::{estimate_reward, RewardEstimate};
