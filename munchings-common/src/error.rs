use std::fmt;

use thiserror::Error;

use crate::sync::Collection;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
    #[error("{collection} document `{id}` not found")]
    NotFound { collection: Collection, id: String },
    #[error("Malformed document")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Client-side rejection of user input. Carries one entry per failing field so
/// each message can be shown next to its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }

    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}

/// Collects field errors while validating a form.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, ok: bool, field: &'static str, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
        self
    }

    pub fn require(&mut self, value: &str, field: &'static str, label: &str) -> &mut Self {
        self.check(!value.trim().is_empty(), field, format!("{} is required", label))
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported state transition from `{from}` to `{to}`")]
pub struct IllegalTransition {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Error, Debug)]
pub enum TransitionError {
    #[error(transparent)]
    Illegal(#[from] IllegalTransition),
    #[error("Failed to persist status change")]
    Persistence(#[from] PersistenceError),
}
