//! Shared-file BacklogRepository implementation.

use crate::paths::TriagePaths;
use crate::storage::{run_blocking, AtomicJsonFile};
use async_trait::async_trait;
use tracing::debug;
use triage_core::principal::Principal;
use triage_core::task::{Backlog, BacklogRepository};
use triage_core::Result;

/// Backlog repository backed by the single shared `backlog.json` document.
///
/// This is the backend for the local (anonymous) principal; it ignores the
/// principal's identity entirely, so it also serves as the fallback target
/// when a per-user backend is unavailable.
pub struct FileBacklogRepository {
    file: AtomicJsonFile<Backlog>,
}

impl FileBacklogRepository {
    pub fn new(paths: &TriagePaths) -> Self {
        Self {
            file: AtomicJsonFile::new(paths.backlog_file()),
        }
    }
}

#[async_trait]
impl BacklogRepository for FileBacklogRepository {
    async fn load(&self, _principal: &Principal) -> Result<Backlog> {
        let file = self.file.clone();
        let loaded = run_blocking(move || file.load()).await?;

        match loaded {
            Some(backlog) => Ok(backlog),
            None => {
                debug!("no backlog document yet, returning empty backlog");
                Ok(Backlog::default())
            }
        }
    }

    async fn save(&self, _principal: &Principal, backlog: &Backlog) -> Result<()> {
        let file = self.file.clone();
        let backlog = backlog.clone();
        run_blocking(move || file.save(&backlog)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use triage_core::task::Task;

    fn repository(temp_dir: &TempDir) -> FileBacklogRepository {
        let paths = TriagePaths::new(Some(temp_dir.path())).unwrap();
        FileBacklogRepository::new(&paths)
    }

    #[tokio::test]
    async fn test_missing_document_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let backlog = repo.load(&Principal::Local).await.unwrap();
        assert!(backlog.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let mut backlog = Backlog::default();
        let mut task = Task::new("T0001", "Write the report");
        task.labels.push("writing".to_string());
        backlog.tasks.push(task);

        repo.save(&Principal::Local, &backlog).await.unwrap();
        let loaded = repo.load(&Principal::Local).await.unwrap();
        assert_eq!(loaded, backlog);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let mut first = Backlog::default();
        first.tasks.push(Task::new("T0001", "first"));
        repo.save(&Principal::Local, &first).await.unwrap();

        let mut second = Backlog::default();
        second.tasks.push(Task::new("T0002", "second"));
        repo.save(&Principal::Local, &second).await.unwrap();

        let loaded = repo.load(&Principal::Local).await.unwrap();
        assert_eq!(loaded, second);
    }
}
