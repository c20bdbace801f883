use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Credentials, Identity};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Failed to log in. Please check your credentials.")]
    InvalidCredentials,
    #[error("An account already exists for {0}")]
    EmailTaken(String),
    #[error("Sign in required")]
    NotSignedIn,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Cannot hash passphrase: {0}")]
    Hash(String),
    #[error("Cannot issue token")]
    Token(#[from] jsonwebtoken::errors::Error),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<Identity>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
