//! Per-user BacklogRepository implementation.

use crate::paths::TriagePaths;
use crate::storage::{run_blocking, AtomicJsonFile};
use async_trait::async_trait;
use tracing::debug;
use triage_core::principal::Principal;
use triage_core::task::{Backlog, BacklogRepository};
use triage_core::{Result, TriageError};

/// Backlog repository that keeps one document per authenticated user,
/// under `users/<uid>/backlog.json`.
///
/// Only serves `Principal::User`; routing a local principal here is a
/// wiring bug, reported as an internal error rather than silently sharing
/// another user's data.
pub struct UserDirBacklogRepository {
    paths: TriagePaths,
}

impl UserDirBacklogRepository {
    pub fn new(paths: TriagePaths) -> Self {
        Self { paths }
    }

    fn file_for(&self, principal: &Principal) -> Result<AtomicJsonFile<Backlog>> {
        let uid = principal.uid().ok_or_else(|| {
            TriageError::internal("user-scoped backlog requires an authenticated principal")
        })?;
        Ok(AtomicJsonFile::new(self.paths.user_backlog_file(uid)?))
    }
}

#[async_trait]
impl BacklogRepository for UserDirBacklogRepository {
    async fn load(&self, principal: &Principal) -> Result<Backlog> {
        let file = self.file_for(principal)?;
        let loaded = run_blocking(move || file.load()).await?;

        match loaded {
            Some(backlog) => Ok(backlog),
            None => {
                debug!(uid = principal.uid(), "no backlog document for user yet");
                Ok(Backlog::default())
            }
        }
    }

    async fn save(&self, principal: &Principal, backlog: &Backlog) -> Result<()> {
        let file = self.file_for(principal)?;
        let backlog = backlog.clone();
        run_blocking(move || file.save(&backlog)).await?;
        Ok(())
    }
}
