use std::collections::HashMap;
use std::sync::Mutex;

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHash};
use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};
use munchings_common::lock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Credentials, Identity, Role, User};
use crate::provider::{AuthError, IdentityProvider};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    exp: usize,
    iat: usize,
    sub: String,
}

struct StoredUser {
    user: User,
    passphrase_hash: String,
}

/// Identity provider keeping accounts in memory. Passphrases are stored as
/// argon2 hashes; a successful sign-in issues an HS256 access token.
pub struct MemoryIdentityProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expires: TimeDelta,
    users: Mutex<HashMap<String, StoredUser>>,
    session: Mutex<Option<Identity>>,
}

impl MemoryIdentityProvider {
    pub fn new(secret_key: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret_key.as_ref()),
            decoding_key: DecodingKey::from_secret(secret_key.as_ref()),
            access_token_expires: TimeDelta::hours(8),
            users: Mutex::new(HashMap::new()),
            session: Mutex::new(None),
        }
    }

    pub fn create_user(&self, email: &str, password: &str, role: Role) -> Result<User, AuthError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let mut users = lock(&self.users);
        if users.contains_key(&email) {
            return Err(AuthError::EmailTaken(email));
        }

        let salt = SaltString::generate(&mut OsRng);
        let passphrase_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| AuthError::Hash(err.to_string()))?
            .to_string();
        let user = User {
            uid: Uuid::new_v4().to_string(),
            email: email.clone(),
            role,
            created_at: Utc::now(),
        };
        users.insert(
            email,
            StoredUser {
                user: user.clone(),
                passphrase_hash,
            },
        );
        info!(uid = %user.uid, role = ?user.role, "user created");
        Ok(user)
    }

    /// Returns the uid the token was issued to.
    pub fn verify_token(&self, token: &str) -> Result<String, AuthError> {
        let token = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding_key,
            &jsonwebtoken::Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;
        Ok(token.claims.sub)
    }

    fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            exp: (now + self.access_token_expires).timestamp() as usize,
            iat: now.timestamp() as usize,
            sub: user.uid.clone(),
        };
        Ok(jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &self.encoding_key,
        )?)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    fn current_user(&self) -> Option<Identity> {
        lock(&self.session).clone()
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let email = normalize_email(&credentials.email);
        if email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = {
            let users = lock(&self.users);
            let stored = users.get(&email).ok_or(AuthError::InvalidCredentials)?;
            let verified = PasswordHash::new(&stored.passphrase_hash)
                .map(|hash| {
                    Argon2::default()
                        .verify_password(credentials.password.as_bytes(), &hash)
                        .is_ok()
                })
                .unwrap_or(false);
            if !verified {
                warn!(%email, "sign-in rejected");
                return Err(AuthError::InvalidCredentials);
            }
            stored.user.clone()
        };

        let identity = Identity {
            access_token: self.issue_token(&user)?,
            uid: user.uid,
            email: user.email,
            role: user.role,
        };
        *lock(&self.session) = Some(identity.clone());
        info!(uid = %identity.uid, "signed in");
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(identity) = lock(&self.session).take() {
            info!(uid = %identity.uid, "signed out");
        }
        Ok(())
    }
}
