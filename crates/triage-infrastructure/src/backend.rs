//! Storage backend selection.
//!
//! The backend is chosen once at the request boundary from the resolved
//! principal; store implementations never branch on principal-presence
//! internally.

use crate::fallback::FallbackBacklogRepository;
use crate::file_backlog_repository::FileBacklogRepository;
use crate::paths::TriagePaths;
use crate::user_backlog_repository::UserDirBacklogRepository;
use std::sync::Arc;
use tracing::debug;
use triage_core::principal::Principal;
use triage_core::task::BacklogRepository;

/// Picks the backlog backend for the given principal.
///
/// Local callers share the single backlog file. Authenticated callers get
/// the per-user backend, wrapped so a storage failure there degrades to the
/// shared file once before giving up.
pub fn select_backlog_repository(
    principal: &Principal,
    paths: &TriagePaths,
) -> Arc<dyn BacklogRepository> {
    match principal {
        Principal::Local => {
            debug!("using shared-file backlog backend");
            Arc::new(FileBacklogRepository::new(paths))
        }
        Principal::User { uid } => {
            debug!(uid = %uid, "using per-user backlog backend");
            Arc::new(FallbackBacklogRepository::new(
                Arc::new(UserDirBacklogRepository::new(paths.clone())),
                Arc::new(FileBacklogRepository::new(paths)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use triage_core::task::{Backlog, Task};

    #[tokio::test]
    async fn test_selected_backends_are_scoped_per_principal() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TriagePaths::new(Some(temp_dir.path())).unwrap();

        let local = Principal::Local;
        let user = Principal::user("carol");

        let mut backlog = Backlog::default();
        backlog.tasks.push(Task::new("T0001", "local task"));
        select_backlog_repository(&local, &paths)
            .save(&local, &backlog)
            .await
            .unwrap();

        // The user's backend sees its own (empty) collection, not the
        // local file.
        let user_backlog = select_backlog_repository(&user, &paths)
            .load(&user)
            .await
            .unwrap();
        assert!(user_backlog.tasks.is_empty());

        let local_backlog = select_backlog_repository(&local, &paths)
            .load(&local)
            .await
            .unwrap();
        assert_eq!(local_backlog.tasks.len(), 1);
    }
}
