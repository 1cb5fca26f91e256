//! Full quest lifecycle against the in-memory SQLite adapters.

use std::sync::Arc;

use chrono::Utc;

use questkeep_domain::{
    Email, Item, ItemDescription, ItemId, ItemName, ItemType, Player, PlayerName, Quest,
    QuestDescription, QuestReward, QuestStatus, QuestTitle, RewardItem,
};
use questkeep_engine::infrastructure::clock::SystemClock;
use questkeep_engine::infrastructure::ports::{ItemRepo, PlayerRepo, QuestRepo};
use questkeep_engine::infrastructure::sqlite::SqliteRepositories;
use questkeep_engine::use_cases::inventory::InventoryUseCases;
use questkeep_engine::use_cases::quests::{QuestError, QuestUseCases};

struct Harness {
    repos: SqliteRepositories,
    quests: QuestUseCases,
    inventory: InventoryUseCases,
}

async fn harness() -> Harness {
    let repos = SqliteRepositories::in_memory().await.unwrap();
    let clock = Arc::new(SystemClock);
    let quests = QuestUseCases::new(
        repos.quests.clone(),
        repos.players.clone(),
        repos.items.clone(),
        clock.clone(),
    );
    let inventory = InventoryUseCases::new(repos.items.clone(), repos.players.clone(), clock);
    Harness {
        repos,
        quests,
        inventory,
    }
}

fn new_player(name: &str, email: &str) -> Player {
    Player::new(
        PlayerName::new(name).unwrap(),
        Email::new(email).unwrap(),
        "argon2-hash".to_string(),
        Utc::now(),
    )
}

fn potion() -> Item {
    Item::new(
        ItemName::new("Healing Potion").unwrap(),
        ItemDescription::new("Restores 50 health points").unwrap(),
        ItemType::Potion,
        Utc::now(),
    )
}

fn quest_with(reward: QuestReward) -> Quest {
    Quest::new(
        QuestTitle::new("Slay the Marsh Wyrm").unwrap(),
        QuestDescription::new("A wyrm terrorizes the eastern marsh.").unwrap(),
        reward,
        Utc::now(),
    )
}

#[tokio::test]
async fn full_lifecycle_distributes_rewards() {
    let h = harness().await;

    let item = potion();
    h.repos.items.save(&item).await.unwrap();
    assert!(h.repos.items.exists(item.id).await.unwrap());

    let player = new_player("Aria", "aria@example.com");
    h.repos.players.save(&player).await.unwrap();

    let quest = quest_with(QuestReward {
        experience: 100,
        items: vec![RewardItem {
            item_id: item.id,
            quantity: 2,
        }],
    });
    h.repos.quests.save(&quest).await.unwrap();

    // Accept
    let accepted = h.quests.accept.execute(player.id, quest.id).await.unwrap();
    assert_eq!(accepted.quest.status, QuestStatus::InProgress);
    assert_eq!(accepted.in_progress_count, 1);

    // A second player cannot take the same quest
    let rival = new_player("Kael", "kael@example.com");
    h.repos.players.save(&rival).await.unwrap();
    let second = h.quests.accept.execute(rival.id, quest.id).await;
    assert!(matches!(second, Err(QuestError::Domain(_))));

    // Complete: 100 experience stays below the level-2 threshold of 200
    let completion = h
        .quests
        .complete
        .execute(player.id, quest.id)
        .await
        .unwrap();
    assert_eq!(completion.quest.status, QuestStatus::Completed);
    assert_eq!(completion.reward.experience, 100);
    assert!(!completion.reward.level_up);
    assert_eq!(completion.stats.level, 1);
    assert_eq!(completion.stats.experience, 100);

    // Persisted player state matches
    let stored = h.repos.players.get(player.id).await.unwrap().unwrap();
    assert_eq!(stored.level, 1);
    assert_eq!(stored.experience, 100);
    assert_eq!(stored.inventory_quantity(item.id), 2);
    assert!(stored.has_completed_quest(quest.id));
    assert!(!stored.has_quest_in_progress(quest.id));

    // Persisted quest no longer holds an assignment
    let stored_quest = h.repos.quests.get(quest.id).await.unwrap().unwrap();
    assert_eq!(stored_quest.status, QuestStatus::Completed);
    assert!(stored_quest.assigned_player.is_none());

    // Completing again is rejected
    let again = h.quests.complete.execute(player.id, quest.id).await;
    assert!(matches!(again, Err(QuestError::Domain(_))));
}

#[tokio::test]
async fn large_reward_levels_up_through_sqlite() {
    let h = harness().await;

    let player = new_player("Aria", "aria@example.com");
    h.repos.players.save(&player).await.unwrap();

    let quest = quest_with(QuestReward::experience_only(250));
    h.repos.quests.save(&quest).await.unwrap();

    h.quests.accept.execute(player.id, quest.id).await.unwrap();
    let completion = h
        .quests
        .complete
        .execute(player.id, quest.id)
        .await
        .unwrap();

    assert!(completion.reward.level_up);
    assert_eq!(completion.stats.level, 2);
    assert_eq!(completion.stats.experience, 50);
}

#[tokio::test]
async fn rewarded_items_can_be_used() {
    let h = harness().await;

    let item = potion();
    h.repos.items.save(&item).await.unwrap();

    let player = new_player("Aria", "aria@example.com");
    h.repos.players.save(&player).await.unwrap();

    let quest = quest_with(QuestReward {
        experience: 0,
        items: vec![RewardItem {
            item_id: item.id,
            quantity: 3,
        }],
    });
    h.repos.quests.save(&quest).await.unwrap();

    h.quests.accept.execute(player.id, quest.id).await.unwrap();
    h.quests
        .complete
        .execute(player.id, quest.id)
        .await
        .unwrap();

    let usage = h
        .inventory
        .use_item
        .execute(player.id, item.id, 2)
        .await
        .unwrap();
    assert_eq!(usage.remaining, 1);
    assert_eq!(usage.item.name.as_str(), "Healing Potion");

    let stored = h.repos.players.get(player.id).await.unwrap().unwrap();
    assert_eq!(stored.inventory_quantity(item.id), 1);
}

#[tokio::test]
async fn completion_rejects_reward_item_absent_from_catalog() {
    let h = harness().await;

    let player = new_player("Aria", "aria@example.com");
    h.repos.players.save(&player).await.unwrap();

    // The rewarded item was never written to the catalog.
    let quest = quest_with(QuestReward {
        experience: 100,
        items: vec![RewardItem {
            item_id: ItemId::new(),
            quantity: 1,
        }],
    });
    h.repos.quests.save(&quest).await.unwrap();

    h.quests.accept.execute(player.id, quest.id).await.unwrap();
    let result = h.quests.complete.execute(player.id, quest.id).await;
    assert!(matches!(result, Err(QuestError::RewardItemNotFound(_))));

    // Nothing was persisted: no dangling inventory entry, quest still held.
    let stored = h.repos.players.get(player.id).await.unwrap().unwrap();
    assert!(stored.inventory.is_empty());
    assert_eq!(stored.experience, 0);
    assert!(stored.has_quest_in_progress(quest.id));

    let stored_quest = h.repos.quests.get(quest.id).await.unwrap().unwrap();
    assert_eq!(stored_quest.status, QuestStatus::InProgress);
}

#[tokio::test]
async fn abandoned_quest_clears_player_side() {
    let h = harness().await;

    let player = new_player("Aria", "aria@example.com");
    h.repos.players.save(&player).await.unwrap();

    let quest = quest_with(QuestReward::experience_only(100));
    h.repos.quests.save(&quest).await.unwrap();

    h.quests.accept.execute(player.id, quest.id).await.unwrap();
    let abandoned = h.quests.abandon.execute(player.id, quest.id).await.unwrap();
    assert_eq!(abandoned.status, QuestStatus::Abandoned);
    assert!(abandoned.assigned_player.is_none());

    let stored = h.repos.players.get(player.id).await.unwrap().unwrap();
    assert!(!stored.has_quest_in_progress(quest.id));

    // Terminal: cannot be taken again
    let retake = h.quests.accept.execute(player.id, quest.id).await;
    assert!(matches!(retake, Err(QuestError::Domain(_))));
}

#[tokio::test]
async fn quest_listing_filters_by_status() {
    let h = harness().await;

    let player = new_player("Aria", "aria@example.com");
    h.repos.players.save(&player).await.unwrap();

    let open = quest_with(QuestReward::experience_only(10));
    let taken = quest_with(QuestReward::experience_only(20));
    h.repos.quests.save(&open).await.unwrap();
    h.repos.quests.save(&taken).await.unwrap();

    h.quests.accept.execute(player.id, taken.id).await.unwrap();

    let available = h
        .quests
        .queries
        .list(Some(QuestStatus::Available))
        .await
        .unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, open.id);

    let all = h.quests.queries.list(None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn email_lookup_round_trips() {
    let h = harness().await;

    let player = new_player("Aria", "Aria@Example.COM");
    h.repos.players.save(&player).await.unwrap();

    let found = h
        .repos
        .players
        .find_by_email(&Email::new("aria@example.com").unwrap())
        .await
        .unwrap();
    assert_eq!(found.map(|p| p.id), Some(player.id));
}
