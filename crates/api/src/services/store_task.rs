//! Runs synchronous store work on the blocking thread pool.
//!
//! Store backends do file I/O and take a std mutex for writes, so handlers
//! never call them directly on a runtime worker.

use crate::error::ApiError;

/// Runs `f` on the blocking pool and converts its error into an `ApiError`.
pub async fn run_blocking<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(format!("Store task failed: {}", e)))?
        .map_err(Into::into)
}
