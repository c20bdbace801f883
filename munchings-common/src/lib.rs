use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod error;
pub mod status;
pub mod sync;

pub use error::{
    FieldError, IllegalTransition, PersistenceError, TransitionError, ValidationError, Validator,
};

/// Locks a mutex, recovering the guard if a listener panicked while holding it.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
