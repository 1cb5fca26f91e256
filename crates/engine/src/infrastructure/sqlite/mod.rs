//! SQLite persistence adapters.
//!
//! One table per aggregate. Embedded collections (inventory, quest lists,
//! rewards) are stored as JSON text columns through serde_json; the typed
//! structs in the domain crate are the source of truth.

pub mod item_repo;
pub mod player_repo;
pub mod quest_repo;

pub use item_repo::SqliteItemRepo;
pub use player_repo::SqlitePlayerRepo;
pub use quest_repo::SqliteQuestRepo;

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Container wiring all SQLite-backed repositories to one pool.
pub struct SqliteRepositories {
    pub pool: SqlitePool,
    pub items: Arc<SqliteItemRepo>,
    pub players: Arc<SqlitePlayerRepo>,
    pub quests: Arc<SqliteQuestRepo>,
}

impl SqliteRepositories {
    /// Open (or create) the database file and ensure the schema.
    pub async fn connect(path: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .connect(&format!("sqlite:{path}?mode=rwc"))
            .await?;
        ensure_schema(&pool).await?;
        Ok(Self::from_pool(pool))
    }

    /// In-memory database for tests. A single connection keeps every
    /// query on the same in-memory instance.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        ensure_schema(&pool).await?;
        Ok(Self::from_pool(pool))
    }

    fn from_pool(pool: SqlitePool) -> Self {
        Self {
            items: Arc::new(SqliteItemRepo::new(pool.clone())),
            players: Arc::new(SqlitePlayerRepo::new(pool.clone())),
            quests: Arc::new(SqliteQuestRepo::new(pool.clone())),
            pool,
        }
    }
}

/// Create tables if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            item_type TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            level INTEGER NOT NULL,
            experience INTEGER NOT NULL,
            inventory TEXT NOT NULL,
            quests_in_progress TEXT NOT NULL,
            quests_completed TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quests (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            status TEXT NOT NULL,
            reward TEXT NOT NULL,
            assigned_player TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
