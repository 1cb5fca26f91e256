//! Player login use case.

use std::sync::Arc;

use questkeep_domain::Email;

use crate::infrastructure::ports::{ClockPort, PasswordHasherPort, PlayerRepo, TokenPort};

use super::error::AuthError;
use super::AuthenticatedPlayer;

/// Verify credentials and issue a bearer token.
pub struct LoginPlayer {
    players: Arc<dyn PlayerRepo>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenPort>,
    clock: Arc<dyn ClockPort>,
}

impl LoginPlayer {
    pub fn new(
        players: Arc<dyn PlayerRepo>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            players,
            hasher,
            tokens,
            clock,
        }
    }

    pub async fn execute(
        &self,
        email: String,
        password: String,
    ) -> Result<AuthenticatedPlayer, AuthError> {
        // A malformed email can't belong to an account; same answer as a
        // wrong password so the endpoint doesn't leak which part failed.
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let player = self
            .players
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&password, &player.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(player.id, self.clock.now())?;
        tracing::debug!(player_id = %player.id, "Player logged in");

        Ok(AuthenticatedPlayer { player, token })
    }
}
