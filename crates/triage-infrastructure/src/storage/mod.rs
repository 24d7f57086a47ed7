//! Low-level file storage primitives.

pub mod atomic_json;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};

use triage_core::{Result, TriageError};

/// Runs a blocking storage operation off the async runtime's worker threads.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> std::result::Result<T, AtomicJsonError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| TriageError::internal(format!("storage task join failed: {e}")))?
        .map_err(TriageError::from)
}
