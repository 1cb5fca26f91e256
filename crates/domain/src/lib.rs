extern crate self as questkeep_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    CompletedQuest, InventoryEntry, Item, ItemType, Player, Quest, QuestReward, QuestStatus,
    RewardItem,
};

pub use error::DomainError;

pub use ids::{ItemId, PlayerId, QuestId};

pub use value_objects::{
    apply_experience, estimate_reward, exp_for_next_level, Email, ExperienceGain, ItemDescription,
    ItemName, LevelProgress, PlayerName, QuestDescription, QuestTitle, RemovalOutcome,
    RewardEstimate,
};
