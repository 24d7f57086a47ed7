//! Primary/secondary BacklogRepository fallback.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use triage_core::principal::Principal;
use triage_core::task::{Backlog, BacklogRepository};
use triage_core::Result;

/// Tries a primary backend, then a secondary one exactly once when the
/// primary reports a storage failure.
///
/// Only backend failures (`Storage`/`Io`) trigger the fallback; validation
/// problems and corrupt documents propagate unchanged, since retrying them
/// against another backend would mask the real fault. If the secondary also
/// fails, its error is what the caller sees.
pub struct FallbackBacklogRepository {
    primary: Arc<dyn BacklogRepository>,
    secondary: Arc<dyn BacklogRepository>,
}

impl FallbackBacklogRepository {
    pub fn new(primary: Arc<dyn BacklogRepository>, secondary: Arc<dyn BacklogRepository>) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl BacklogRepository for FallbackBacklogRepository {
    async fn load(&self, principal: &Principal) -> Result<Backlog> {
        match self.primary.load(principal).await {
            Ok(backlog) => Ok(backlog),
            Err(err) if err.is_storage_failure() => {
                warn!(error = %err, "primary backlog backend failed on load, trying fallback");
                self.secondary.load(principal).await
            }
            Err(err) => Err(err),
        }
    }

    async fn save(&self, principal: &Principal, backlog: &Backlog) -> Result<()> {
        match self.primary.save(principal, backlog).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_storage_failure() => {
                warn!(error = %err, "primary backlog backend failed on save, trying fallback");
                self.secondary.save(principal, backlog).await
            }
            Err(err) => Err(err),
        }
    }
}
