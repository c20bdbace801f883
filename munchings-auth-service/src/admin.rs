use munchings_common::sync::record::to_document;
use munchings_common::sync::{Collection, SyncAdapter};
use munchings_common::PersistenceError;
use thiserror::Error;
use tracing::info;

use crate::memory::MemoryIdentityProvider;
use crate::models::{Role, User};
use crate::provider::AuthError;

#[derive(Error, Debug)]
pub enum CreateAdminError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Failed to store admin profile")]
    Persistence(#[from] PersistenceError),
}

/// Registers an admin account and records its profile in the `users`
/// collection.
pub async fn create_admin(
    identity: &MemoryIdentityProvider,
    adapter: &dyn SyncAdapter,
    email: &str,
    password: &str,
) -> Result<User, CreateAdminError> {
    let user = identity.create_user(email, password, Role::Admin)?;
    let profile_id = adapter
        .create(Collection::Users, to_document(&user)?)
        .await?;
    info!(uid = %user.uid, %profile_id, "admin user created");
    Ok(user)
}
