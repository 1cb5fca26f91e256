//! Port traits between use cases and infrastructure.

pub mod error;
pub mod external;
pub mod repos;

pub use error::{CredentialError, RepoError, TokenError};
pub use external::{ClockPort, PasswordHasherPort, TokenPort};
pub use repos::{ItemRepo, PlayerRepo, QuestRepo};

#[cfg(test)]
pub use external::{MockClockPort, MockPasswordHasherPort, MockTokenPort};
#[cfg(test)]
pub use repos::{MockItemRepo, MockPlayerRepo, MockQuestRepo};
