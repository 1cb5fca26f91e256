//! Non-repository ports: clock, password hashing, token signing.

use chrono::{DateTime, Utc};

use questkeep_domain::PlayerId;

use super::error::{CredentialError, TokenError};

/// Clock abstraction so use cases can be tested with a fixed time.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Password hashing port. Implementations must produce self-describing
/// hashes that `verify` can check without extra parameters.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasherPort: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, CredentialError>;
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// Bearer token port: issue a signed token for a player and resolve a
/// presented token back to the player id.
#[cfg_attr(test, mockall::automock)]
pub trait TokenPort: Send + Sync {
    fn issue(&self, player_id: PlayerId, now: DateTime<Utc>) -> Result<String, TokenError>;
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<PlayerId, TokenError>;
}
