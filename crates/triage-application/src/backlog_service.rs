//! Direct backlog operations.
//!
//! These bypass the proposal flow: the caller edits the backlog itself
//! rather than submitting a change for review. Every operation re-loads the
//! collection, mutates it, and persists it back; no state is retained
//! between calls.

use crate::collection_locks::CollectionLocks;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use triage_core::principal::Principal;
use triage_core::task::id::next_available_id;
use triage_core::task::{extract, Backlog, BacklogRepository, Task, STATUS_DONE};
use triage_core::time::now_iso8601;
use triage_core::{Result, TriageError};

/// Partial task update: present fields overwrite the stored value, absent
/// fields are left alone (shallow merge, no field-level diffing).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignable_to: Option<Vec<String>>,
}

/// Service for reading and directly editing a principal's backlog.
pub struct BacklogService {
    backlog: Arc<dyn BacklogRepository>,
    locks: CollectionLocks,
}

impl BacklogService {
    pub fn new(backlog: Arc<dyn BacklogRepository>, locks: CollectionLocks) -> Self {
        Self { backlog, locks }
    }

    /// Returns the principal's current backlog.
    pub async fn get(&self, principal: &Principal) -> Result<Backlog> {
        self.backlog.load(principal).await
    }

    /// Idempotently provisions a backlog document for the principal.
    ///
    /// Loading already degrades to an empty backlog, so this simply persists
    /// whatever loads (the empty default for a fresh principal). Existing
    /// data round-trips unchanged.
    pub async fn initialize(&self, principal: &Principal) -> Result<Backlog> {
        let _guard = self.locks.lock_backlog().await;
        let backlog = self.backlog.load(principal).await?;
        self.backlog.save(principal, &backlog).await?;
        Ok(backlog)
    }

    /// Adds a task with a freshly allocated id.
    pub async fn add_task(
        &self,
        principal: &Principal,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TriageError::validation("title", "title must not be empty"));
        }

        let _guard = self.locks.lock_backlog().await;
        let mut backlog = self.backlog.load(principal).await?;

        let mut task = Task::new(next_available_id(&backlog.tasks), title);
        task.description = description.unwrap_or_default().to_string();
        task.created = Some(now_iso8601());

        backlog.tasks.push(task.clone());
        self.backlog.save(principal, &backlog).await?;

        info!(task_id = %task.id, "added task");
        Ok(task)
    }

    /// Applies a partial update to the task with the given id.
    ///
    /// A status change into `Done` from any other value also stamps
    /// `completion_time`; re-asserting `Done` on an already-done task leaves
    /// the original stamp untouched.
    pub async fn update_task(
        &self,
        principal: &Principal,
        task_id: &str,
        updates: TaskUpdate,
    ) -> Result<Task> {
        let _guard = self.locks.lock_backlog().await;
        let mut backlog = self.backlog.load(principal).await?;

        let task = backlog
            .find_task_mut(task_id)
            .ok_or_else(|| TriageError::not_found("task", task_id))?;

        let was_done = task.is_done();

        if let Some(title) = updates.title {
            task.title = title;
        }
        if let Some(description) = updates.description {
            task.description = description;
        }
        if let Some(status) = updates.status {
            task.status = status;
        }
        if let Some(kind) = updates.kind {
            task.kind = kind;
        }
        if let Some(labels) = updates.labels {
            task.labels = labels;
        }
        if let Some(assignable_to) = updates.assignable_to {
            task.assignable_to = assignable_to;
        }

        if task.status == STATUS_DONE && !was_done {
            task.completion_time = Some(now_iso8601());
        }

        let updated = task.clone();
        self.backlog.save(principal, &backlog).await?;

        info!(task_id = %updated.id, status = %updated.status, "updated task");
        Ok(updated)
    }

    /// Extracts tasks from free text and inserts them into the backlog.
    ///
    /// The extractor returning nothing is a user-facing error at this layer:
    /// the caller sent text that contained no recognizable task lines.
    pub async fn extract_into_backlog(
        &self,
        principal: &Principal,
        text: &str,
    ) -> Result<Vec<Task>> {
        if text.trim().is_empty() {
            return Err(TriageError::validation("text", "text must not be empty"));
        }

        let drafts = extract::extract_tasks(text);
        if drafts.is_empty() {
            return Err(TriageError::validation(
                "text",
                "no tasks could be extracted from the text",
            ));
        }

        let _guard = self.locks.lock_backlog().await;
        let mut backlog = self.backlog.load(principal).await?;

        let mut inserted = Vec::with_capacity(drafts.len());
        for mut draft in drafts {
            draft.id = next_available_id(&backlog.tasks);
            backlog.tasks.push(draft.clone());
            inserted.push(draft);
        }

        self.backlog.save(principal, &backlog).await?;

        info!(count = inserted.len(), "extracted tasks into backlog");
        Ok(inserted)
    }
}
