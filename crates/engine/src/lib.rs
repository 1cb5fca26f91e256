//! QuestKeep engine: REST API over the quest/inventory/leveling core.

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;
