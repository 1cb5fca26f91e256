//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{
    ClockPort, ItemRepo, PasswordHasherPort, PlayerRepo, QuestRepo, TokenPort,
};
use crate::infrastructure::sqlite::SqliteRepositories;
use crate::use_cases::{
    AuthUseCases, CatalogUseCases, InventoryUseCases, ProfileUseCases, QuestUseCases,
};

/// Main application state.
///
/// Holds repositories and use cases; passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub tokens: Arc<dyn TokenPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all repository ports.
pub struct Repositories {
    pub items: Arc<dyn ItemRepo>,
    pub players: Arc<dyn PlayerRepo>,
    pub quests: Arc<dyn QuestRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub auth: AuthUseCases,
    pub quests: QuestUseCases,
    pub inventory: InventoryUseCases,
    pub profile: ProfileUseCases,
    pub catalog: CatalogUseCases,
}

impl App {
    pub fn new(
        items: Arc<dyn ItemRepo>,
        players: Arc<dyn PlayerRepo>,
        quests: Arc<dyn QuestRepo>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let use_cases = UseCases {
            auth: AuthUseCases::new(
                players.clone(),
                hasher,
                tokens.clone(),
                clock.clone(),
            ),
            quests: QuestUseCases::new(
                quests.clone(),
                players.clone(),
                items.clone(),
                clock.clone(),
            ),
            inventory: InventoryUseCases::new(items.clone(), players.clone(), clock.clone()),
            profile: ProfileUseCases::new(players.clone(), items.clone(), quests.clone()),
            catalog: CatalogUseCases::new(items.clone()),
        };

        Self {
            repositories: Repositories {
                items,
                players,
                quests,
            },
            use_cases,
            tokens,
            clock,
        }
    }

    /// Wire the app against the SQLite adapters.
    pub fn with_sqlite(
        repos: &SqliteRepositories,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::new(
            repos.items.clone(),
            repos.players.clone(),
            repos.quests.clone(),
            hasher,
            tokens,
            clock,
        )
    }
}
