//! File-backed ProposalRepository implementation.

use crate::paths::TriagePaths;
use crate::storage::{run_blocking, AtomicJsonFile};
use async_trait::async_trait;
use tracing::info;
use triage_core::proposal::{ProposalList, ProposalRepository};
use triage_core::Result;

/// Proposal repository backed by the `pending_proposals.json` document.
///
/// The collection is global (not per-principal). The first load against a
/// missing document persists an empty collection, so the bootstrap happens
/// once instead of being re-detected on every call.
pub struct FileProposalRepository {
    file: AtomicJsonFile<ProposalList>,
}

impl FileProposalRepository {
    pub fn new(paths: &TriagePaths) -> Self {
        Self {
            file: AtomicJsonFile::new(paths.proposals_file()),
        }
    }
}

#[async_trait]
impl ProposalRepository for FileProposalRepository {
    async fn load(&self) -> Result<ProposalList> {
        let file = self.file.clone();
        let loaded = run_blocking(move || file.load()).await?;

        match loaded {
            Some(proposals) => Ok(proposals),
            None => {
                // Idempotent bootstrap: persist the empty collection so the
                // next load finds a document.
                info!("no proposal document yet, bootstrapping an empty collection");
                let file = self.file.clone();
                let empty = ProposalList::default();
                let to_write = empty.clone();
                run_blocking(move || file.save(&to_write)).await?;
                Ok(empty)
            }
        }
    }

    async fn save(&self, proposals: &ProposalList) -> Result<()> {
        let file = self.file.clone();
        let proposals = proposals.clone();
        run_blocking(move || file.save(&proposals)).await?;
        Ok(())
    }
}
