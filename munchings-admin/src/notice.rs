use std::fmt::Display;

use munchings_auth_service::admin::CreateAdminError;
use munchings_auth_service::AuthError;
use munchings_common::{IllegalTransition, PersistenceError, TransitionError, ValidationError};
use munchings_menu_service::MenuError;
use munchings_order_service::PlaceOrderError;
use munchings_reservation_service::BookingError;

use crate::config::ConfigError;
use crate::session::AdminError;

const TRY_AGAIN: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A short message for the person at the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Cart feedback after adding an item.
    pub fn added_to_cart(name: &str, quantity: u32) -> Self {
        if quantity > 1 {
            Self::success(format!("Added another {} to cart", name))
        } else {
            Self::success(format!("{} added to cart", name))
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

impl From<&ValidationError> for Notice {
    fn from(err: &ValidationError) -> Self {
        Notice::error(err.to_string())
    }
}

impl From<&PersistenceError> for Notice {
    fn from(err: &PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { .. } => {
                Notice::error("That record no longer exists. It may have been removed.")
            }
            PersistenceError::Unavailable(_) | PersistenceError::Malformed(_) => {
                Notice::error(TRY_AGAIN)
            }
        }
    }
}

impl From<&AuthError> for Notice {
    fn from(err: &AuthError) -> Self {
        match err {
            AuthError::MissingCredentials
            | AuthError::InvalidCredentials
            | AuthError::EmailTaken(_)
            | AuthError::NotSignedIn => Notice::error(err.to_string()),
            AuthError::InvalidToken => Notice::error(AuthError::NotSignedIn.to_string()),
            AuthError::Hash(_) | AuthError::Token(_) => Notice::error(TRY_AGAIN),
        }
    }
}

impl From<&CreateAdminError> for Notice {
    fn from(err: &CreateAdminError) -> Self {
        match err {
            CreateAdminError::Auth(err) => err.into(),
            CreateAdminError::Persistence(_) => Notice::error(err.to_string()),
        }
    }
}

impl From<&IllegalTransition> for Notice {
    fn from(err: &IllegalTransition) -> Self {
        Notice::error(format!("Cannot change status from {} to {}", err.from, err.to))
    }
}

impl From<&TransitionError> for Notice {
    fn from(err: &TransitionError) -> Self {
        match err {
            TransitionError::Illegal(err) => err.into(),
            TransitionError::Persistence(_) => Notice::error("Failed to update status"),
        }
    }
}

impl From<&MenuError> for Notice {
    fn from(err: &MenuError) -> Self {
        match err {
            MenuError::Validation(err) => err.into(),
            MenuError::Persistence(_) => Notice::error(err.to_string()),
        }
    }
}

impl From<&PlaceOrderError> for Notice {
    fn from(err: &PlaceOrderError) -> Self {
        match err {
            PlaceOrderError::Validation(err) => err.into(),
            PlaceOrderError::Persistence(_) => Notice::error(err.to_string()),
        }
    }
}

impl From<&BookingError> for Notice {
    fn from(err: &BookingError) -> Self {
        match err {
            BookingError::Validation(err) => err.into(),
            BookingError::Persistence(_) => Notice::error(err.to_string()),
        }
    }
}

impl From<&ConfigError> for Notice {
    fn from(err: &ConfigError) -> Self {
        Notice::error(err.to_string())
    }
}

impl From<&AdminError> for Notice {
    fn from(err: &AdminError) -> Self {
        match err {
            AdminError::Auth(err) => err.into(),
            AdminError::Transition(err) => err.into(),
            AdminError::Menu(err) => err.into(),
            AdminError::Persistence(err) => err.into(),
        }
    }
}
