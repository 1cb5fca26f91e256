//! Player registration use case.

use std::sync::Arc;

use questkeep_domain::{DomainError, Email, Player, PlayerName};

use crate::infrastructure::ports::{
    ClockPort, PasswordHasherPort, PlayerRepo, RepoError, TokenPort,
};

use super::error::AuthError;
use super::AuthenticatedPlayer;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Register a new player account.
pub struct RegisterPlayer {
    players: Arc<dyn PlayerRepo>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenPort>,
    clock: Arc<dyn ClockPort>,
}

impl RegisterPlayer {
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

    /// Execute registration.
    ///
    /// Validates name/email/password, rejects duplicate emails, hashes the
    /// password, persists the new level-1 player and issues a bearer token.
    pub async fn execute(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<AuthenticatedPlayer, AuthError> {
        let name = PlayerName::new(name)?;
        let email = Email::new(email)?;
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::Validation(DomainError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            ))));
        }

        if self.players.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.hasher.hash(&password)?;
        let now = self.clock.now();
        let player = Player::new(name, email, password_hash, now);

        // A concurrent registration can slip past the pre-check; the unique
        // index then rejects the insert, which is still a duplicate email.
        self.players.save(&player).await.map_err(|e| match e {
            RepoError::ConstraintViolation(_) => AuthError::EmailTaken,
            other => AuthError::Repo(other),
        })?;

        let token = self.tokens.issue(player.id, now)?;
        tracing::info!(player_id = %player.id, "Player registered");

        Ok(AuthenticatedPlayer { player, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{
        MockPasswordHasherPort, MockPlayerRepo, MockTokenPort,
    };
    use chrono::Utc;

    fn existing_player() -> Player {
        Player::new(
            PlayerName::new("Aria").unwrap(),
            Email::new("aria@example.com").unwrap(),
            "hash".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn when_valid_input_registers_and_issues_token() {
        let mut players = MockPlayerRepo::new();
        players.expect_find_by_email().returning(|_| Ok(None));
        players
            .expect_save()
            .withf(|p| p.level == 1 && p.password_hash == "hashed")
            .returning(|_| Ok(()));

        let mut hasher = MockPasswordHasherPort::new();
        hasher
            .expect_hash()
            .withf(|pw| pw == "hunter22")
            .returning(|_| Ok("hashed".to_string()));

        let mut tokens = MockTokenPort::new();
        tokens
            .expect_issue()
            .returning(|_, _| Ok("token-123".to_string()));

        let use_case = RegisterPlayer::new(
            Arc::new(players),
            Arc::new(hasher),
            Arc::new(tokens),
            Arc::new(FixedClock(Utc::now())),
        );
        let result = use_case
            .execute(
                "Aria".to_string(),
                "aria@example.com".to_string(),
                "hunter22".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(result.token, "token-123");
        assert_eq!(result.player.name.as_str(), "Aria");
        assert_eq!(result.player.level, 1);
    }

    #[tokio::test]
    async fn when_email_taken_returns_error() {
        let mut players = MockPlayerRepo::new();
        players
            .expect_find_by_email()
            .returning(|_| Ok(Some(existing_player())));

        let use_case = RegisterPlayer::new(
            Arc::new(players),
            Arc::new(MockPasswordHasherPort::new()),
            Arc::new(MockTokenPort::new()),
            Arc::new(FixedClock(Utc::now())),
        );
        let result = use_case
            .execute(
                "Aria".to_string(),
                "aria@example.com".to_string(),
                "hunter22".to_string(),
            )
            .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn when_unique_index_rejects_insert_reports_email_taken() {
        let mut players = MockPlayerRepo::new();
        players.expect_find_by_email().returning(|_| Ok(None));
        players
            .expect_save()
            .returning(|_| Err(RepoError::constraint("UNIQUE constraint failed: players.email")));

        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_hash().returning(|_| Ok("hashed".to_string()));

        let use_case = RegisterPlayer::new(
            Arc::new(players),
            Arc::new(hasher),
            Arc::new(MockTokenPort::new()),
            Arc::new(FixedClock(Utc::now())),
        );
        let result = use_case
            .execute(
                "Aria".to_string(),
                "aria@example.com".to_string(),
                "hunter22".to_string(),
            )
            .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn when_password_too_short_returns_validation_error() {
        let use_case = RegisterPlayer::new(
            Arc::new(MockPlayerRepo::new()),
            Arc::new(MockPasswordHasherPort::new()),
            Arc::new(MockTokenPort::new()),
            Arc::new(FixedClock(Utc::now())),
        );
        let result = use_case
            .execute(
                "Aria".to_string(),
                "aria@example.com".to_string(),
                "12345".to_string(),
            )
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn when_email_invalid_returns_validation_error() {
        let use_case = RegisterPlayer::new(
            Arc::new(MockPlayerRepo::new()),
            Arc::new(MockPasswordHasherPort::new()),
            Arc::new(MockTokenPort::new()),
            Arc::new(FixedClock(Utc::now())),
        );
        let result = use_case
            .execute(
                "Aria".to_string(),
                "not-an-email".to_string(),
                "hunter22".to_string(),
            )
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}
