//! Credential hashing and bearer token signing.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use questkeep_domain::PlayerId;

use crate::infrastructure::ports::{
    CredentialError, PasswordHasherPort, TokenError, TokenPort,
};

type HmacSha256 = Hmac<Sha256>;

/// How long an issued token stays valid.
const TOKEN_TTL_DAYS: i64 = 7;

/// Argon2id password hasher with default parameters.
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = password_hash::SaltString::generate(&mut rand::thread_rng());
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError(format!("Password hash failure: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        let parsed = password_hash::PasswordHash::new(hash)
            .map_err(|e| CredentialError(format!("Corrupt password hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Signed claims carried inside a token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    player_id: PlayerId,
    /// Expiry as a unix timestamp in seconds
    exp: i64,
}

/// HMAC-SHA256 signed bearer tokens.
///
/// Wire form is `<base64url(claims json)>.<base64url(signature)>`.
pub struct HmacTokenService {
    secret: Vec<u8>,
}

impl HmacTokenService {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, TokenError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| TokenError::InvalidSignature)?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl TokenPort for HmacTokenService {
    fn issue(&self, player_id: PlayerId, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            player_id,
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        let payload = serde_json::to_vec(&claims).map_err(|_| TokenError::Malformed)?;
        let signature = self.sign(&payload)?;
        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(&signature)
        ))
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<PlayerId, TokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(TokenError::Malformed)?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let presented = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| TokenError::InvalidSignature)?;
        mac.update(&payload);
        mac.verify_slice(&presented)
            .map_err(|_| TokenError::InvalidSignature)?;

        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;
        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims.player_id)
    }
}
