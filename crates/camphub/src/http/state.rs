//! Application state for the HTTP server.

use std::sync::{Arc, Mutex};

use super::error::AppError;
use crate::storage::Storage;

/// Shared application state passed to all handlers.
///
/// Holds the one storage handle opened at startup. Storage work runs on the
/// blocking pool with the lock held, so requests touch the database one at a
/// time.
#[derive(Debug, Clone)]
pub struct AppState {
    storage: Arc<Mutex<Storage>>,
}

impl AppState {
    /// Create application state owning the given storage.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    /// Run `f` against the storage on tokio's blocking pool.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns, or [`AppError::Internal`] if the lock is
    /// poisoned or the blocking task fails.
    pub async fn with_storage<F, T>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Storage) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let storage = Arc::clone(&self.storage);
        tokio::task::spawn_blocking(move || {
            let mut guard = storage
                .lock()
                .map_err(|_| AppError::Internal("storage lock poisoned".to_string()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {e}")))?
    }
}
