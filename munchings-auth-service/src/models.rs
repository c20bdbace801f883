use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

/// Account profile, stored in the `users` collection.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// The signed-in user as seen by the rest of the application.
#[derive(PartialEq, Clone, Debug)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub role: Role,
    pub access_token: String,
}

#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
