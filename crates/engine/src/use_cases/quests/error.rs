//! Quest operation errors.

use questkeep_domain::{DomainError, ItemId, PlayerId, QuestId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Quest not found: {0}")]
    QuestNotFound(QuestId),
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
    /// A quest reward references an item the catalog does not hold.
    #[error("Reward item not found in catalog: {0}")]
    RewardItemNotFound(ItemId),
    #[error("Player already has this quest in progress or completed")]
    DuplicateAssignment,
    /// Ownership mismatch: the quest is assigned to someone else.
    #[error("Quest is not assigned to this player")]
    NotQuestOwner,
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
