//! Backlog repository trait.
//!
//! Defines the interface for backlog persistence operations.

use super::model::Backlog;
use crate::error::Result;
use crate::principal::Principal;
use async_trait::async_trait;

/// An abstract store for a principal's task collection.
///
/// Implementations decide where the collection lives (shared local file,
/// per-user document). The principal is always passed explicitly so behavior
/// is deterministic and testable without an ambient "current user".
///
/// Saves are whole-document: the previous snapshot is replaced, last writer
/// wins. Callers needing stricter semantics serialize their
/// read-modify-write cycles in front of this trait.
#[async_trait]
pub trait BacklogRepository: Send + Sync {
    /// Loads the caller's current task collection.
    ///
    /// A principal with no persisted collection yet gets an empty backlog,
    /// not an error.
    async fn load(&self, principal: &Principal) -> Result<Backlog>;

    /// Persists the full collection, overwriting any previous snapshot.
    async fn save(&self, principal: &Principal, backlog: &Backlog) -> Result<()>;
}
