//! Core domain entities

pub mod item;
pub mod player;
pub mod quest;

pub use item::{Item, ItemType};
pub use player::{CompletedQuest, InventoryEntry, Player};
pub use quest::{Quest, QuestReward, QuestStatus, RewardItem};
