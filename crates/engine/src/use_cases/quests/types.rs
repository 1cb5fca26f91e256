//! Result types returned by quest use cases.

use serde::Serialize;

use questkeep_domain::{LevelProgress, Quest, RewardItem};

/// Outcome of accepting a quest.
#[derive(Debug, Serialize)]
pub struct AcceptedQuest {
    pub quest: Quest,
    /// How many quests the player now has in progress
    pub in_progress_count: usize,
}

/// What the player was granted on completion.
#[derive(Debug, Serialize)]
pub struct RewardSummary {
    /// Experience granted by this quest (not the player's new total)
    pub experience: u64,
    pub level_up: bool,
    pub items: Vec<RewardItem>,
}

/// Outcome of completing a quest.
#[derive(Debug, Serialize)]
pub struct QuestCompletion {
    pub quest: Quest,
    pub reward: RewardSummary,
    /// Player leveling state after rewards were applied
    pub stats: LevelProgress,
}
