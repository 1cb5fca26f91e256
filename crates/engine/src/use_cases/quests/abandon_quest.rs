//! Abandon quest use case.
//!
//! The quest-side transition is persisted first; if the player record has
//! since disappeared the abandonment still stands.

use std::sync::Arc;

use questkeep_domain::{PlayerId, Quest, QuestId, QuestStatus};

use crate::infrastructure::ports::{ClockPort, PlayerRepo, QuestRepo};

use super::error::QuestError;

pub struct AbandonQuest {
    quests: Arc<dyn QuestRepo>,
    players: Arc<dyn PlayerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AbandonQuest {
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

    pub async fn execute(
        &self,
        player_id: PlayerId,
        quest_id: QuestId,
    ) -> Result<Quest, QuestError> {
        let mut quest = self
            .quests
            .get(quest_id)
            .await?
            .ok_or(QuestError::QuestNotFound(quest_id))?;

        if quest.status == QuestStatus::InProgress
            && quest.assigned_player != Some(player_id)
        {
            return Err(QuestError::NotQuestOwner);
        }

        let captured = quest.abandon()?;

        let now = self.clock.now();
        quest.updated_at = now;
        self.quests.save(&quest).await?;

        if let Some(assigned) = captured {
            if let Some(mut player) = self.players.get(assigned).await? {
                player.remove_quest_in_progress(quest_id);
                player.updated_at = now;
                self.players.save(&player).await?;
            }
        }

        tracing::info!(player_id = %player_id, quest_id = %quest_id, "Quest abandoned");

        Ok(quest)
    }
}
