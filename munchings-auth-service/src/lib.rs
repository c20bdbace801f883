pub mod admin;
pub mod memory;
pub mod models;
pub mod provider;

pub use memory::MemoryIdentityProvider;
pub use models::{Credentials, Identity, Role, User};
pub use provider::{AuthError, IdentityProvider};
