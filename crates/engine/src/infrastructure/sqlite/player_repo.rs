//! SQLite adapter for player records.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use questkeep_domain::{
    CompletedQuest, Email, InventoryEntry, Player, PlayerId, PlayerName, QuestId,
};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const COLUMNS: &str = "id, name, email, password_hash, level, experience, inventory, \
                       quests_in_progress, quests_completed, created_at, updated_at";

pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
    let read = |e: sqlx::Error| RepoError::database("players.read", e);

    let id: String = row.try_get("id").map_err(read)?;
    let name: String = row.try_get("name").map_err(read)?;
    let email: String = row.try_get("email").map_err(read)?;
    let password_hash: String = row.try_get("password_hash").map_err(read)?;
    let level: i64 = row.try_get("level").map_err(read)?;
    let experience: i64 = row.try_get("experience").map_err(read)?;
    let inventory: String = row.try_get("inventory").map_err(read)?;
    let quests_in_progress: String = row.try_get("quests_in_progress").map_err(read)?;
    let quests_completed: String = row.try_get("quests_completed").map_err(read)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

    let inventory: Vec<InventoryEntry> =
        serde_json::from_str(&inventory).map_err(RepoError::serialization)?;
    let quests_in_progress: Vec<QuestId> =
        serde_json::from_str(&quests_in_progress).map_err(RepoError::serialization)?;
    let quests_completed: Vec<CompletedQuest> =
        serde_json::from_str(&quests_completed).map_err(RepoError::serialization)?;

    Ok(Player {
        id: PlayerId::from_str(&id).map_err(RepoError::serialization)?,
        name: PlayerName::new(name).map_err(RepoError::serialization)?,
        email: Email::new(email).map_err(RepoError::serialization)?,
        password_hash,
        level: u32::try_from(level).map_err(RepoError::serialization)?,
        experience: u64::try_from(experience).map_err(RepoError::serialization)?,
        inventory,
        quests_in_progress,
        quests_completed,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM players WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.get", e))?;
        row.as_ref().map(row_to_player).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM players WHERE email = ?"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.find_by_email", e))?;
        row.as_ref().map(row_to_player).transpose()
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        let inventory =
            serde_json::to_string(&player.inventory).map_err(RepoError::serialization)?;
        let quests_in_progress =
            serde_json::to_string(&player.quests_in_progress).map_err(RepoError::serialization)?;
        let quests_completed =
            serde_json::to_string(&player.quests_completed).map_err(RepoError::serialization)?;

        sqlx::query(
            r#"
            INSERT INTO players (id, name, email, password_hash, level, experience,
                                 inventory, quests_in_progress, quests_completed,
                                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                password_hash = excluded.password_hash,
                level = excluded.level,
                experience = excluded.experience,
                inventory = excluded.inventory,
                quests_in_progress = excluded.quests_in_progress,
                quests_completed = excluded.quests_completed,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(player.id.to_string())
        .bind(player.name.as_str())
        .bind(player.email.as_str())
        .bind(&player.password_hash)
        .bind(i64::from(player.level))
        .bind(i64::try_from(player.experience).map_err(RepoError::serialization)?)
        .bind(inventory)
        .bind(quests_in_progress)
        .bind(quests_completed)
        .bind(player.created_at)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The email column carries a UNIQUE index
            if e.to_string().contains("UNIQUE") {
                RepoError::constraint(format!("Email already registered: {}", player.email))
            } else {
                RepoError::database("players.save", e)
            }
        })?;
        Ok(())
    }
}
