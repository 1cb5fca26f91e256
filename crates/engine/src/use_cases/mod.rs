//! Use cases orchestrating domain logic over the ports.

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod profile;
pub mod quests;

pub use auth::AuthUseCases;
pub use catalog::CatalogUseCases;
pub use inventory::InventoryUseCases;
pub use profile::ProfileUseCases;
pub use quests::QuestUseCases;
