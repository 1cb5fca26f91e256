//! Player entity - account, leveling state, inventory and quest logs
//!
//! The player aggregate owns its inventory and quest membership lists.
//! All mutations go through methods so the counters and lists stay
//! consistent (no zero-quantity stacks, no duplicate quest entries).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ItemId, PlayerId, QuestId};
use crate::value_objects::{apply_experience, Email, ExperienceGain, PlayerName, RemovalOutcome};

/// A stack of one item in a player's inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Record of a finished quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedQuest {
    pub quest_id: QuestId,
    pub completed_at: DateTime<Utc>,
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: PlayerName,
    pub email: Email,
    /// Argon2 hash, never the plaintext. Skipped when serializing so it
    /// can't leak through an API response.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub level: u32,
    pub experience: u64,
    pub inventory: Vec<InventoryEntry>,
    pub quests_in_progress: Vec<QuestId>,
    pub quests_completed: Vec<CompletedQuest>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a fresh level-1 player with an empty inventory.
    pub fn new(
        name: PlayerName,
        email: Email,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PlayerId::new(),
            name,
            email,
            password_hash,
            level: 1,
            experience: 0,
            inventory: Vec::new(),
            quests_in_progress: Vec::new(),
            quests_completed: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Quantity of `item_id` currently held, zero if absent.
    pub fn inventory_quantity(&self, item_id: ItemId) -> u32 {
        self.inventory
            .iter()
            .find(|entry| entry.item_id == item_id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Add `quantity` of an item, merging into an existing stack.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero.
    pub fn add_to_inventory(&mut self, item_id: ItemId, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        match self
            .inventory
            .iter_mut()
            .find(|entry| entry.item_id == item_id)
        {
            Some(entry) => entry.quantity += quantity,
            None => self.inventory.push(InventoryEntry { item_id, quantity }),
        }
        Ok(())
    }

    /// Remove `quantity` of an item. Overdraft clamps to removing the
    /// whole stack; the entry is dropped when it empties.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidQuantity` if `quantity` is zero
    /// - `DomainError::ItemNotInInventory` if the item has no stack
    pub fn remove_from_inventory(
        &mut self,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<RemovalOutcome, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        let Some(position) = self
            .inventory
            .iter()
            .position(|entry| entry.item_id == item_id)
        else {
            return Err(DomainError::item_not_in_inventory(item_id.to_string()));
        };
        let outcome = RemovalOutcome::subtract(self.inventory[position].quantity, quantity);
        match outcome {
            RemovalOutcome::Reduced(remaining) => self.inventory[position].quantity = remaining,
            RemovalOutcome::Emptied => {
                self.inventory.remove(position);
            }
        }
        Ok(outcome)
    }

    /// Grant experience, carrying surplus across level thresholds.
    pub fn gain_experience(&mut self, amount: u64) -> ExperienceGain {
        let gain = apply_experience(self.level, self.experience, amount);
        self.level = gain.new_level;
        self.experience = gain.new_experience;
        gain
    }

    pub fn has_quest_in_progress(&self, quest_id: QuestId) -> bool {
        self.quests_in_progress.contains(&quest_id)
    }

    pub fn has_completed_quest(&self, quest_id: QuestId) -> bool {
        self.quests_completed
            .iter()
            .any(|record| record.quest_id == quest_id)
    }

    /// Track a quest as in progress. Idempotent.
    pub fn add_quest_in_progress(&mut self, quest_id: QuestId) {
        if !self.has_quest_in_progress(quest_id) {
            self.quests_in_progress.push(quest_id);
        }
    }

    /// Drop a quest from the in-progress list, if present.
    pub fn remove_quest_in_progress(&mut self, quest_id: QuestId) {
        self.quests_in_progress.retain(|id| *id != quest_id);
    }

    /// Move a quest from in-progress to the completion log.
    pub fn record_quest_completion(&mut self, quest_id: QuestId, completed_at: DateTime<Utc>) {
        self.remove_quest_in_progress(quest_id);
        if !self.has_completed_quest(quest_id) {
            self.quests_completed.push(CompletedQuest {
                quest_id,
                completed_at,
            });
        }
    }
}
