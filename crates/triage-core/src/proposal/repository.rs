//! Proposal repository trait.
//!
//! Defines the interface for proposal persistence operations.

use super::model::ProposalList;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the proposal collection.
///
/// The collection is global rather than per-principal: every pending change
/// lands in one reviewable list. Implementations bootstrap an empty
/// collection when none has been persisted yet, so "missing" is handled once
/// rather than re-detected on every call.
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Loads the full proposal collection, bootstrapping an empty one if no
    /// collection has been persisted yet.
    async fn load(&self) -> Result<ProposalList>;

    /// Persists the full collection, overwriting any previous snapshot.
    async fn save(&self, proposals: &ProposalList) -> Result<()>;
}
