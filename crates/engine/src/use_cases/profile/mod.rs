//! Player profile use cases.

pub mod get_profile;

pub use get_profile::{GetProfile, PlayerProfile, ProfileError};

use std::sync::Arc;

use crate::infrastructure::ports::{ItemRepo, PlayerRepo, QuestRepo};

pub struct ProfileUseCases {
    pub get: GetProfile,
}

impl ProfileUseCases {
    pub fn new(
        players: Arc<dyn PlayerRepo>,
        items: Arc<dyn ItemRepo>,
        quests: Arc<dyn QuestRepo>,
    ) -> Self {
        Self {
            get: GetProfile::new(players, items, quests),
        }
    }
}
