//! Quest entity - lifecycle state machine and reward definition
//!
//! States: `available` -> `in-progress` -> `completed` (terminal), with
//! `in-progress` -> `abandoned` (terminal). A quest holds an assigned
//! player if and only if it is in progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ItemId, PlayerId, QuestId};
use crate::value_objects::{QuestDescription, QuestTitle};

/// One item entry in a quest reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// What a quest grants on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestReward {
    pub experience: u64,
    #[serde(default)]
    pub items: Vec<RewardItem>,
}

impl QuestReward {
    pub fn experience_only(experience: u64) -> Self {
        Self {
            experience,
            items: Vec::new(),
        }
    }
}

/// Lifecycle status of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestStatus {
    Available,
    InProgress,
    Completed,
    Abandoned,
}

impl QuestStatus {
    /// True for states with no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Abandoned)
    }
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
            Self::Abandoned => write!(f, "abandoned"),
        }
    }
}

impl std::str::FromStr for QuestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "abandoned" => Ok(Self::Abandoned),
            _ => Err(DomainError::parse(format!("Unknown quest status: {s}"))),
        }
    }
}

/// A quest players can take on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: QuestTitle,
    pub description: QuestDescription,
    pub status: QuestStatus,
    pub reward: QuestReward,
    /// Set if and only if status is `InProgress`
    pub assigned_player: Option<PlayerId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quest {
    /// Create a new quest in the `Available` state.
    pub fn new(
        title: QuestTitle,
        description: QuestDescription,
        reward: QuestReward,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: QuestId::new(),
            title,
            description,
            status: QuestStatus::Available,
            reward,
            assigned_player: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Assign the quest to a player, moving it to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the quest is
    /// currently `Available`.
    pub fn assign_to(&mut self, player_id: PlayerId) -> Result<(), DomainError> {
        if self.status != QuestStatus::Available {
            return Err(DomainError::invalid_transition(format!(
                "Quest cannot be assigned while {}",
                self.status
            )));
        }
        self.status = QuestStatus::InProgress;
        self.assigned_player = Some(player_id);
        Ok(())
    }

    /// Mark the quest completed, returning the player who finished it.
    ///
    /// The assignment is cleared so the assigned-player field only ever
    /// holds a value while the quest is in progress.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidTransition` unless the quest is `InProgress`
    /// - `DomainError::Validation` if no player is assigned
    pub fn complete(&mut self) -> Result<PlayerId, DomainError> {
        if self.status != QuestStatus::InProgress {
            return Err(DomainError::invalid_transition(format!(
                "Quest cannot be completed while {}",
                self.status
            )));
        }
        let Some(player_id) = self.assigned_player.take() else {
            return Err(DomainError::validation(
                "Quest is in progress but has no assigned player",
            ));
        };
        self.status = QuestStatus::Completed;
        Ok(player_id)
    }

    /// Abandon the quest, returning the player who was assigned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the quest is
    /// `InProgress`.
    pub fn abandon(&mut self) -> Result<Option<PlayerId>, DomainError> {
        if self.status != QuestStatus::InProgress {
            return Err(DomainError::invalid_transition(format!(
                "Quest cannot be abandoned while {}",
                self.status
            )));
        }
        self.status = QuestStatus::Abandoned;
        Ok(self.assigned_player.take())
    }
}
