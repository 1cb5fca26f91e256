//! Read-side quest queries.

use std::sync::Arc;

use questkeep_domain::{Quest, QuestId, QuestStatus};

use crate::infrastructure::ports::QuestRepo;

use super::error::QuestError;

pub struct QuestQueries {
    quests: Arc<dyn QuestRepo>,
}

impl QuestQueries {
    pub fn new(quests: Arc<dyn QuestRepo>) -> Self {
        Self { quests }
    }

    pub async fn get(&self, quest_id: QuestId) -> Result<Quest, QuestError> {
        self.quests
            .get(quest_id)
            .await?
            .ok_or(QuestError::QuestNotFound(quest_id))
    }

    /// List quests, `None` meaning every status.
    pub async fn list(&self, status: Option<QuestStatus>) -> Result<Vec<Quest>, QuestError> {
        Ok(self.quests.list(status).await?)
    }
}
