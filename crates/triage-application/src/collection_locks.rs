//! Per-collection write serialization.
//!
//! The stores themselves are last-writer-wins whole-document saves, so two
//! concurrent read-modify-write cycles against the same collection would
//! silently drop one side's changes. Every mutating service operation takes
//! the owning collection's lock for its full load-mutate-save cycle.
//!
//! Lock ordering: operations needing both collections (approve) take the
//! proposal lock first, then the backlog lock.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Shared serialization points for the two persisted collections.
///
/// Clone freely; clones share the same underlying locks. Both services of
/// one deployment must be built from the same `CollectionLocks` value.
#[derive(Clone, Default)]
pub struct CollectionLocks {
    backlog: Arc<Mutex<()>>,
    proposals: Arc<Mutex<()>>,
}

impl CollectionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn lock_backlog(&self) -> MutexGuard<'_, ()> {
        self.backlog.lock().await
    }

    pub(crate) async fn lock_proposals(&self) -> MutexGuard<'_, ()> {
        self.proposals.lock().await
    }
}
