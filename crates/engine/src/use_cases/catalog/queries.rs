//! Read-side catalog queries.

use std::sync::Arc;

use questkeep_domain::{Item, ItemId, ItemType};

use crate::infrastructure::ports::{ItemRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

pub struct CatalogQueries {
    items: Arc<dyn ItemRepo>,
}

impl CatalogQueries {
    pub fn new(items: Arc<dyn ItemRepo>) -> Self {
        Self { items }
    }

    pub async fn get(&self, item_id: ItemId) -> Result<Item, CatalogError> {
        self.items
            .get(item_id)
            .await?
            .ok_or(CatalogError::ItemNotFound(item_id))
    }

    /// List items sorted by name, optionally filtered by type.
    pub async fn list(&self, item_type: Option<ItemType>) -> Result<Vec<Item>, CatalogError> {
        Ok(self.items.list(item_type).await?)
    }
}
