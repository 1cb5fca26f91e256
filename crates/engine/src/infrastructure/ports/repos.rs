//! Repository port traits for database access.

use async_trait::async_trait;

use questkeep_domain::{Email, Item, ItemId, ItemType, Player, PlayerId, Quest, QuestId, QuestStatus};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepo: Send + Sync {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError>;
    async fn exists(&self, id: ItemId) -> Result<bool, RepoError>;
    async fn save(&self, item: &Item) -> Result<(), RepoError>;

    /// All items, optionally filtered by type, sorted by name.
    async fn list(&self, item_type: Option<ItemType>) -> Result<Vec<Item>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<Player>, RepoError>;
    async fn save(&self, player: &Player) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestRepo: Send + Sync {
    async fn get(&self, id: QuestId) -> Result<Option<Quest>, RepoError>;
    async fn save(&self, quest: &Quest) -> Result<(), RepoError>;

    /// All quests, optionally filtered by status, newest first.
    async fn list(&self, status: Option<QuestStatus>) -> Result<Vec<Quest>, RepoError>;
}
