//! Bearer token extraction for protected routes.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use questkeep_domain::Player;

use crate::app::App;

use super::http::ApiError;

/// The authenticated player, resolved from the `Authorization` header.
///
/// Rejects with 401 when the header is missing or malformed, the token
/// fails verification, or the player record no longer exists.
pub struct AuthPlayer(pub Player);

impl FromRequestParts<Arc<App>> for AuthPlayer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        app: &Arc<App>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let player_id = app
            .tokens
            .verify(token, app.clock.now())
            .map_err(|_| ApiError::Unauthorized)?;

        let player = app
            .repositories
            .players
            .get(player_id)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthPlayer(player))
    }
}
