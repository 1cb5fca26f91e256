//! Complete quest use case.
//!
//! Distributes rewards to the assigned player, records the completion,
//! then flips the quest to completed. The player is persisted before the
//! quest so a crash between the two writes leaves the quest in progress
//! rather than losing granted rewards.

use std::sync::Arc;

use questkeep_domain::{LevelProgress, PlayerId, QuestId, QuestStatus};

use crate::infrastructure::ports::{ClockPort, ItemRepo, PlayerRepo, QuestRepo};

use super::error::QuestError;
use super::types::{QuestCompletion, RewardSummary};

pub struct CompleteQuest {
    quests: Arc<dyn QuestRepo>,
    players: Arc<dyn PlayerRepo>,
    items: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CompleteQuest {
    pub fn new(
        quests: Arc<dyn QuestRepo>,
        players: Arc<dyn PlayerRepo>,
        items: Arc<dyn ItemRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            quests,
            players,
            items,
            clock,
        }
    }

    pub async fn execute(
        &self,
        player_id: PlayerId,
        quest_id: QuestId,
    ) -> Result<QuestCompletion, QuestError> {
        let mut quest = self
            .quests
            .get(quest_id)
            .await?
            .ok_or(QuestError::QuestNotFound(quest_id))?;

        // Ownership check comes before the transition so a foreign caller
        // gets a 403-class error, not a transition error.
        if quest.status == QuestStatus::InProgress
            && quest.assigned_player != Some(player_id)
        {
            return Err(QuestError::NotQuestOwner);
        }

        let finisher = quest.complete()?;

        let mut player = self
            .players
            .get(finisher)
            .await?
            .ok_or(QuestError::PlayerNotFound(finisher))?;

        // Reward items must resolve against the catalog before the player
        // is mutated, so a stale reward never leaves a dangling inventory
        // reference.
        for entry in &quest.reward.items {
            if !self.items.exists(entry.item_id).await? {
                return Err(QuestError::RewardItemNotFound(entry.item_id));
            }
        }

        let gain = player.gain_experience(quest.reward.experience);
        for entry in &quest.reward.items {
            player.add_to_inventory(entry.item_id, entry.quantity)?;
        }

        let now = self.clock.now();
        player.record_quest_completion(quest_id, now);
        player.updated_at = now;
        self.players.save(&player).await?;

        quest.updated_at = now;
        self.quests.save(&quest).await?;

        tracing::info!(
            player_id = %finisher,
            quest_id = %quest_id,
            experience = quest.reward.experience,
            level_up = gain.leveled_up(),
            "Quest completed"
        );

        let reward = RewardSummary {
            experience: quest.reward.experience,
            level_up: gain.leveled_up(),
            items: quest.reward.items.clone(),
        };
        let stats = LevelProgress::for_player(player.level, player.experience);

        Ok(QuestCompletion {
            quest,
            reward,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockItemRepo, MockPlayerRepo, MockQuestRepo};
    use chrono::Utc;
    use mockall::Sequence;
    use questkeep_domain::{
        DomainError, Email, ItemId, Player, PlayerName, Quest, QuestDescription, QuestReward,
        QuestTitle, RewardItem,
    };

    fn test_player() -> Player {
        Player::new(
            PlayerName::new("Aria").unwrap(),
            Email::new("aria@example.com").unwrap(),
            "hash".to_string(),
            Utc::now(),
        )
    }

    fn quest_with_reward(reward: QuestReward) -> Quest {
        Quest::new(
            QuestTitle::new("Slay the Marsh Wyrm").unwrap(),
            QuestDescription::new("A wyrm terrorizes the eastern marsh.").unwrap(),
            reward,
            Utc::now(),
        )
    }

    fn use_case(players: MockPlayerRepo, quests: MockQuestRepo, items: MockItemRepo) -> CompleteQuest {
        CompleteQuest::new(
            Arc::new(quests),
            Arc::new(players),
            Arc::new(items),
            Arc::new(FixedClock(Utc::now())),
        )
    }

    #[tokio::test]
    async fn when_available_quest_completed_returns_transition_error() {
        let quest = quest_with_reward(QuestReward::experience_only(100));
        let quest_id = quest.id;

        let mut quests = MockQuestRepo::new();
        quests.expect_get().returning(move |_| Ok(Some(quest.clone())));

        let result = use_case(MockPlayerRepo::new(), quests, MockItemRepo::new())
            .execute(PlayerId::new(), quest_id)
            .await;

        assert!(matches!(
            result,
            Err(QuestError::Domain(DomainError::InvalidTransition(_)))
        ));
    }

    #[tokio::test]
    async fn when_quest_owned_by_someone_else_returns_not_owner() {
        let owner = PlayerId::new();
        let mut quest = quest_with_reward(QuestReward::experience_only(100));
        quest.assign_to(owner).unwrap();
        let quest_id = quest.id;

        let mut quests = MockQuestRepo::new();
        quests.expect_get().returning(move |_| Ok(Some(quest.clone())));

        let result = use_case(MockPlayerRepo::new(), quests, MockItemRepo::new())
            .execute(PlayerId::new(), quest_id)
            .await;

        assert!(matches!(result, Err(QuestError::NotQuestOwner)));
    }

    #[tokio::test]
    async fn rewards_distributed_and_player_saved_before_quest() {
        let player = test_player();
        let player_id = player.id;
        let potion = ItemId::new();
        let mut quest = quest_with_reward(QuestReward {
            experience: 250,
            items: vec![RewardItem {
                item_id: potion,
                quantity: 2,
            }],
        });
        quest.assign_to(player_id).unwrap();
        let quest_id = quest.id;

        let mut seq = Sequence::new();

        let mut quests = MockQuestRepo::new();
        let quest_clone = quest.clone();
        quests
            .expect_get()
            .returning(move |_| Ok(Some(quest_clone.clone())));

        let mut players = MockPlayerRepo::new();
        let player_clone = player.clone();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player_clone.clone())));
        players
            .expect_save()
            .once()
            .in_sequence(&mut seq)
            .withf(move |p| {
                p.level == 2
                    && p.experience == 50
                    && p.inventory_quantity(potion) == 2
                    && p.has_completed_quest(quest_id)
                    && !p.has_quest_in_progress(quest_id)
            })
            .returning(|_| Ok(()));
        quests
            .expect_save()
            .once()
            .in_sequence(&mut seq)
            .withf(|q| q.status == QuestStatus::Completed && q.assigned_player.is_none())
            .returning(|_| Ok(()));

        let mut items = MockItemRepo::new();
        items.expect_exists().returning(|_| Ok(true));

        let result = use_case(players, quests, items)
            .execute(player_id, quest_id)
            .await
            .unwrap();

        assert_eq!(result.quest.status, QuestStatus::Completed);
        assert_eq!(result.reward.experience, 250);
        assert!(result.reward.level_up);
        assert_eq!(result.reward.items.len(), 1);
        assert_eq!(result.stats.level, 2);
        assert_eq!(result.stats.experience, 50);
    }

    #[tokio::test]
    async fn when_assigned_player_missing_returns_player_not_found() {
        let owner = PlayerId::new();
        let mut quest = quest_with_reward(QuestReward::experience_only(10));
        quest.assign_to(owner).unwrap();
        let quest_id = quest.id;

        let mut quests = MockQuestRepo::new();
        quests.expect_get().returning(move |_| Ok(Some(quest.clone())));

        let mut players = MockPlayerRepo::new();
        players.expect_get().returning(|_| Ok(None));

        let result = use_case(players, quests, MockItemRepo::new())
            .execute(owner, quest_id)
            .await;

        assert!(matches!(result, Err(QuestError::PlayerNotFound(_))));
    }

    #[tokio::test]
    async fn when_reward_item_missing_from_catalog_rejects_without_saving() {
        let player = test_player();
        let player_id = player.id;
        let phantom = ItemId::new();
        let mut quest = quest_with_reward(QuestReward {
            experience: 100,
            items: vec![RewardItem {
                item_id: phantom,
                quantity: 1,
            }],
        });
        quest.assign_to(player_id).unwrap();
        let quest_id = quest.id;

        let mut quests = MockQuestRepo::new();
        quests.expect_get().returning(move |_| Ok(Some(quest.clone())));

        let mut players = MockPlayerRepo::new();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player.clone())));

        let mut items = MockItemRepo::new();
        items.expect_exists().returning(|_| Ok(false));

        // No save expectations: neither repo may be written to.
        let result = use_case(players, quests, items)
            .execute(player_id, quest_id)
            .await;

        assert!(
            matches!(result, Err(QuestError::RewardItemNotFound(id)) if id == phantom)
        );
    }

    #[tokio::test]
    async fn zero_experience_reward_does_not_level_up() {
        let player = test_player();
        let player_id = player.id;
        let mut quest = quest_with_reward(QuestReward::experience_only(0));
        quest.assign_to(player_id).unwrap();
        let quest_id = quest.id;

        let mut quests = MockQuestRepo::new();
        let quest_clone = quest.clone();
        quests
            .expect_get()
            .returning(move |_| Ok(Some(quest_clone.clone())));
        quests.expect_save().returning(|_| Ok(()));

        let mut players = MockPlayerRepo::new();
        let player_clone = player.clone();
        players
            .expect_get()
            .returning(move |_| Ok(Some(player_clone.clone())));
        players.expect_save().returning(|_| Ok(()));

        let result = use_case(players, quests, MockItemRepo::new())
            .execute(player_id, quest_id)
            .await
            .unwrap();

        assert!(!result.reward.level_up);
        assert_eq!(result.stats.level, 1);
    }
}
