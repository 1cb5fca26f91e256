//! SQLite adapter for quests.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use questkeep_domain::{
    PlayerId, Quest, QuestDescription, QuestId, QuestReward, QuestStatus, QuestTitle,
};

use crate::infrastructure::ports::{QuestRepo, RepoError};

const COLUMNS: &str = "id, title, description, status, reward, assigned_player, created_at, updated_at";

pub struct SqliteQuestRepo {
    pool: SqlitePool,
}

impl SqliteQuestRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_quest(row: &SqliteRow) -> Result<Quest, RepoError> {
    let read = |e: sqlx::Error| RepoError::database("quests.read", e);

    let id: String = row.try_get("id").map_err(read)?;
    let title: String = row.try_get("title").map_err(read)?;
    let description: String = row.try_get("description").map_err(read)?;
    let status: String = row.try_get("status").map_err(read)?;
    let reward: String = row.try_get("reward").map_err(read)?;
    let assigned_player: Option<String> = row.try_get("assigned_player").map_err(read)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

    let reward: QuestReward = serde_json::from_str(&reward).map_err(RepoError::serialization)?;
    let assigned_player = assigned_player
        .map(|s| PlayerId::from_str(&s))
        .transpose()
        .map_err(RepoError::serialization)?;

    Ok(Quest {
        id: QuestId::from_str(&id).map_err(RepoError::serialization)?,
        title: QuestTitle::new(title).map_err(RepoError::serialization)?,
        description: QuestDescription::new(description).map_err(RepoError::serialization)?,
        status: QuestStatus::from_str(&status).map_err(RepoError::serialization)?,
        reward,
        assigned_player,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl QuestRepo for SqliteQuestRepo {
    async fn get(&self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM quests WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("quests.get", e))?;
        row.as_ref().map(row_to_quest).transpose()
    }

    async fn save(&self, quest: &Quest) -> Result<(), RepoError> {
        let reward = serde_json::to_string(&quest.reward).map_err(RepoError::serialization)?;

        sqlx::query(
            r#"
            INSERT INTO quests (id, title, description, status, reward,
                                assigned_player, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                status = excluded.status,
                reward = excluded.reward,
                assigned_player = excluded.assigned_player,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(quest.id.to_string())
        .bind(quest.title.as_str())
        .bind(quest.description.as_str())
        .bind(quest.status.to_string())
        .bind(reward)
        .bind(quest.assigned_player.map(|p| p.to_string()))
        .bind(quest.created_at)
        .bind(quest.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("quests.save", e))?;
        Ok(())
    }

    async fn list(&self, status: Option<QuestStatus>) -> Result<Vec<Quest>, RepoError> {
        let rows = match status {
            Some(s) => {
                sqlx::query(&format!(
                    "SELECT {COLUMNS} FROM quests WHERE status = ? ORDER BY created_at DESC"
                ))
                .bind(s.to_string())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {COLUMNS} FROM quests ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| RepoError::database("quests.list", e))?;
        rows.iter().map(row_to_quest).collect()
    }
}
