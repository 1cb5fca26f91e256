//! Player profile read model.
//!
//! Joins the player record with item and quest details so the client gets
//! a render-ready view in one round trip. Dangling references (an item or
//! quest deleted since) are carried as `None` rather than failing the
//! whole profile.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use questkeep_domain::{Item, LevelProgress, PlayerId, Quest, QuestId};

use crate::infrastructure::ports::{ItemRepo, PlayerRepo, QuestRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// One inventory stack enriched with catalog details.
#[derive(Debug, Serialize)]
pub struct InventoryView {
    pub quantity: u32,
    pub item: Option<Item>,
}

/// A completed quest with its details and completion time.
#[derive(Debug, Serialize)]
pub struct CompletedQuestView {
    pub quest_id: QuestId,
    pub completed_at: DateTime<Utc>,
    pub quest: Option<Quest>,
}

#[derive(Debug, Serialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub stats: LevelProgress,
    pub inventory: Vec<InventoryView>,
    pub quests_in_progress: Vec<Quest>,
    pub quests_completed: Vec<CompletedQuestView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct GetProfile {
    players: Arc<dyn PlayerRepo>,
    items: Arc<dyn ItemRepo>,
    quests: Arc<dyn QuestRepo>,
}

impl GetProfile {
    pub fn new(
        players: Arc<dyn PlayerRepo>,
        items: Arc<dyn ItemRepo>,
        quests: Arc<dyn QuestRepo>,
    ) -> Self {
        Self {
            players,
            items,
            quests,
        }
    }

    pub async fn execute(&self, player_id: PlayerId) -> Result<PlayerProfile, ProfileError> {
        let player = self
            .players
            .get(player_id)
            .await?
            .ok_or(ProfileError::PlayerNotFound(player_id))?;

        let mut inventory = Vec::with_capacity(player.inventory.len());
        for entry in &player.inventory {
            inventory.push(InventoryView {
                quantity: entry.quantity,
                item: self.items.get(entry.item_id).await?,
            });
        }

        let mut quests_in_progress = Vec::with_capacity(player.quests_in_progress.len());
        for quest_id in &player.quests_in_progress {
            if let Some(quest) = self.quests.get(*quest_id).await? {
                quests_in_progress.push(quest);
            }
        }

        let mut quests_completed = Vec::with_capacity(player.quests_completed.len());
        for record in &player.quests_completed {
            quests_completed.push(CompletedQuestView {
                quest_id: record.quest_id,
                completed_at: record.completed_at,
                quest: self.quests.get(record.quest_id).await?,
            });
        }

        Ok(PlayerProfile {
            id: player.id,
            name: player.name.to_string(),
            email: player.email.to_string(),
            stats: LevelProgress::for_player(player.level, player.experience),
            inventory,
            quests_in_progress,
            quests_completed,
            created_at: player.created_at,
            updated_at: player.updated_at,
        })
    }
}
