//! Authentication errors.

use questkeep_domain::DomainError;

use crate::infrastructure::ports::{CredentialError, RepoError, TokenError};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailTaken,
    /// Deliberately covers both unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
