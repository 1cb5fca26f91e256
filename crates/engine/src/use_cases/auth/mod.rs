//! Registration and login.

pub mod error;
pub mod login;
pub mod register;

pub use error::AuthError;
pub use login::LoginPlayer;
pub use register::RegisterPlayer;

use std::sync::Arc;

use questkeep_domain::Player;

use crate::infrastructure::ports::{ClockPort, PasswordHasherPort, PlayerRepo, TokenPort};

/// A player together with a freshly issued bearer token.
pub struct AuthenticatedPlayer {
    pub player: Player,
    pub token: String,
}

pub struct AuthUseCases {
    pub register: RegisterPlayer,
    pub login: LoginPlayer,
}

impl AuthUseCases {
    pub fn new(
        players: Arc<dyn PlayerRepo>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            register: RegisterPlayer::new(
                players.clone(),
                hasher.clone(),
                tokens.clone(),
                clock.clone(),
            ),
            login: LoginPlayer::new(players, hasher, tokens, clock),
        }
    }
}
