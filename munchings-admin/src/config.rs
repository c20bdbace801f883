use dotenvy::dotenv;
use thiserror::Error;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@restaurant.com";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub secret_key: Option<String>,
    pub admin_email: String,
    pub admin_password: Option<String>,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            secret_key: non_empty("SECRET_KEY"),
            admin_email: non_empty("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: non_empty("ADMIN_PASSWORD"),
        }
    }

    pub fn secret_key(&self) -> Result<&str, ConfigError> {
        self.secret_key
            .as_deref()
            .ok_or(ConfigError::Missing("SECRET_KEY"))
    }

    pub fn admin_password(&self) -> Result<&str, ConfigError> {
        self.admin_password
            .as_deref()
            .ok_or(ConfigError::Missing("ADMIN_PASSWORD"))
    }
}
