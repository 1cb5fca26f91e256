//! Quest lifecycle use cases.

pub mod abandon_quest;
pub mod accept_quest;
pub mod complete_quest;
pub mod error;
pub mod queries;
pub mod types;

pub use abandon_quest::AbandonQuest;
pub use accept_quest::AcceptQuest;
pub use complete_quest::CompleteQuest;
pub use error::QuestError;
pub use queries::QuestQueries;
pub use types::{AcceptedQuest, QuestCompletion, RewardSummary};

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, ItemRepo, PlayerRepo, QuestRepo};

pub struct QuestUseCases {
    pub accept: AcceptQuest,
    pub complete: CompleteQuest,
    pub abandon: AbandonQuest,
    pub queries: QuestQueries,
}

impl QuestUseCases {
    pub fn new(
        quests: Arc<dyn QuestRepo>,
        players: Arc<dyn PlayerRepo>,
        items: Arc<dyn ItemRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            accept: AcceptQuest::new(quests.clone(), players.clone(), clock.clone()),
            complete: CompleteQuest::new(quests.clone(), players.clone(), items, clock.clone()),
            abandon: AbandonQuest::new(quests.clone(), players, clock),
            queries: QuestQueries::new(quests),
        }
    }
}
