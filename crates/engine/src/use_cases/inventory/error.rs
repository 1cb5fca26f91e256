//! Inventory operation errors.

use questkeep_domain::{DomainError, ItemId, PlayerId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
    /// Rejected at the boundary even though the ledger itself clamps.
    #[error("Only {held} held, cannot use {requested}")]
    InsufficientQuantity { held: u32, requested: u32 },
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
