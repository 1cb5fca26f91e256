//! SQLite adapter for the item catalog.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use questkeep_domain::{Item, ItemDescription, ItemId, ItemName, ItemType};

use crate::infrastructure::ports::{ItemRepo, RepoError};

pub struct SqliteItemRepo {
    pool: SqlitePool,
}

impl SqliteItemRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: &SqliteRow) -> Result<Item, RepoError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepoError::database("items.read", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| RepoError::database("items.read", e))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| RepoError::database("items.read", e))?;
    let item_type: String = row
        .try_get("item_type")
        .map_err(|e| RepoError::database("items.read", e))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| RepoError::database("items.read", e))?;

    Ok(Item {
        id: ItemId::from_str(&id).map_err(RepoError::serialization)?,
        name: ItemName::new(name).map_err(RepoError::serialization)?,
        description: ItemDescription::new(description).map_err(RepoError::serialization)?,
        item_type: ItemType::from_str(&item_type).map_err(RepoError::serialization)?,
        created_at,
    })
}

#[async_trait]
impl ItemRepo for SqliteItemRepo {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        let row = sqlx::query("SELECT id, name, description, item_type, created_at FROM items WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("items.get", e))?;
        row.as_ref().map(row_to_item).transpose()
    }

    async fn exists(&self, id: ItemId) -> Result<bool, RepoError> {
        let row = sqlx::query("SELECT 1 FROM items WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("items.exists", e))?;
        Ok(row.is_some())
    }

    async fn save(&self, item: &Item) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, description, item_type, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                item_type = excluded.item_type
            "#,
        )
        .bind(item.id.to_string())
        .bind(item.name.as_str())
        .bind(item.description.as_str())
        .bind(item.item_type.to_string())
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("items.save", e))?;
        Ok(())
    }

    async fn list(&self, item_type: Option<ItemType>) -> Result<Vec<Item>, RepoError> {
        let rows = match item_type {
            Some(t) => {
                sqlx::query("SELECT id, name, description, item_type, created_at FROM items WHERE item_type = ? ORDER BY name")
                    .bind(t.to_string())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT id, name, description, item_type, created_at FROM items ORDER BY name")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepoError::database("items.list", e))?;
        rows.iter().map(row_to_item).collect()
    }
}
