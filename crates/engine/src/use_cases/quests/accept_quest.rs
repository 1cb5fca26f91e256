//! Accept quest use case.
//!
//! Moves an available quest to in-progress and records it on the player.

use std::sync::Arc;

use questkeep_domain::{PlayerId, QuestId};

use crate::infrastructure::ports::{ClockPort, PlayerRepo, QuestRepo};

use super::error::QuestError;
use super::types::AcceptedQuest;

pub struct AcceptQuest {
    quests: Arc<dyn QuestRepo>,
    players: Arc<dyn PlayerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AcceptQuest {
    pub fn new(
        quests: Arc<dyn QuestRepo>,
        players: Arc<dyn PlayerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            quests,
            players,
            clock,
        }
    }

    /// Execute the acceptance.
    ///
    /// Fails with `DuplicateAssignment` when the player already holds or
    /// has completed the quest, and with a domain transition error when
    /// the quest is not available.
    pub async fn execute(
        &self,
        player_id: PlayerId,
        quest_id: QuestId,
    ) -> Result<AcceptedQuest, QuestError> {
        let mut player = self
            .players
            .get(player_id)
            .await?
            .ok_or(QuestError::PlayerNotFound(player_id))?;

        let mut quest = self
            .quests
            .get(quest_id)
            .await?
            .ok_or(QuestError::QuestNotFound(quest_id))?;

        if player.has_quest_in_progress(quest_id) || player.has_completed_quest(quest_id) {
            return Err(QuestError::DuplicateAssignment);
        }

        quest.assign_to(player_id)?;

        let now = self.clock.now();
        quest.updated_at = now;
        self.quests.save(&quest).await?;

        player.add_quest_in_progress(quest_id);
        player.updated_at = now;
        self.players.save(&player).await?;

        tracing::info!(player_id = %player_id, quest_id = %quest_id, "Quest accepted");

        Ok(AcceptedQuest {
            quest,
            in_progress_count: player.quests_in_progress.len(),
        })
    }
}
