//! Proposal lifecycle management.
//!
//! Owns the proposal state machine and the merge step that applies an
//! approved proposal onto the backlog:
//!
//! ```text
//!         create
//!           |
//!           v
//!       [pending] --approve--> [approved]  (terminal)
//!           |
//!           +------reject----> [rejected]  (terminal)
//!           |
//!           +------modify----> [pending]   (task payload replaced)
//! ```
//!
//! Each operation re-loads the collections it touches, mutates them, and
//! persists them back; nothing is cached between calls.

use crate::collection_locks::CollectionLocks;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use triage_core::principal::Principal;
use triage_core::proposal::{Proposal, ProposalKind, ProposalList, ProposalRepository, ProposalStatus};
use triage_core::task::{BacklogRepository, Task};
use triage_core::{Result, TriageError};

/// Payload for creating a proposal. `kind` arrives as the raw wire string so
/// an unknown value surfaces as a validation error, not a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProposalRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub task: Option<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_task: Option<Task>,
}

/// Service owning proposal state transitions and the apply-to-backlog merge.
pub struct ProposalService {
    proposals: Arc<dyn ProposalRepository>,
    backlog: Arc<dyn BacklogRepository>,
    locks: CollectionLocks,
}

impl ProposalService {
    pub fn new(
        proposals: Arc<dyn ProposalRepository>,
        backlog: Arc<dyn BacklogRepository>,
        locks: CollectionLocks,
    ) -> Self {
        Self {
            proposals,
            backlog,
            locks,
        }
    }

    /// Validates and stores a new pending proposal.
    ///
    /// Fails fast: an `update` without its `original_task` is rejected here,
    /// at creation time, never at approval time.
    pub async fn create(&self, request: CreateProposalRequest) -> Result<Proposal> {
        let kind = match request.kind.as_str() {
            "new" => ProposalKind::New,
            "update" => ProposalKind::Update,
            other => {
                return Err(TriageError::validation(
                    "type",
                    format!("unknown proposal type '{other}', expected 'new' or 'update'"),
                ));
            }
        };

        let task = request
            .task
            .ok_or_else(|| TriageError::validation("task", "task is required"))?;

        let original_task = match kind {
            ProposalKind::Update => Some(request.original_task.ok_or_else(|| {
                TriageError::validation(
                    "original_task",
                    "original_task is required for update proposals",
                )
            })?),
            // Any original_task sent with a `new` proposal is dropped.
            ProposalKind::New => None,
        };

        let proposal = Proposal::new(kind, task, original_task);

        let _guard = self.locks.lock_proposals().await;
        let mut list = self.proposals.load().await?;
        list.proposals.push(proposal.clone());
        self.proposals.save(&list).await?;

        info!(proposal_id = %proposal.id, kind = ?proposal.kind, "created proposal");
        Ok(proposal)
    }

    /// Returns the full proposal collection. Filtering by status is a
    /// display concern, not done here.
    pub async fn list(&self) -> Result<ProposalList> {
        self.proposals.load().await
    }

    /// Approves a pending proposal and applies it to the principal's
    /// backlog.
    ///
    /// The backlog mutation is persisted before the proposal's status flips,
    /// so a crash in between cannot leave a proposal marked approved without
    /// its task change on disk. (The reverse window, task written but the
    /// status flip unpersisted, remains.)
    pub async fn approve(&self, principal: &Principal, proposal_id: &str) -> Result<Proposal> {
        let _proposals_guard = self.locks.lock_proposals().await;
        let mut list = self.proposals.load().await?;
        let index = self.locate_pending(&list, proposal_id)?;

        let proposal_task = list.proposals[index].task.clone();
        let kind = list.proposals[index].kind;

        let _backlog_guard = self.locks.lock_backlog().await;
        let mut backlog = self.backlog.load(principal).await?;

        match kind {
            ProposalKind::New => {
                // An id minted at proposal time can be taken by the time the
                // reviewer approves. Refuse rather than silently re-number:
                // the reviewer saw this id in the diff.
                if backlog.find_task(&proposal_task.id).is_some() {
                    return Err(TriageError::invalid_state(format!(
                        "task id '{}' already exists in the backlog",
                        proposal_task.id
                    )));
                }
                backlog.tasks.push(proposal_task);
            }
            ProposalKind::Update => {
                let slot = backlog
                    .find_task_mut(&proposal_task.id)
                    .ok_or_else(|| TriageError::not_found("task", &proposal_task.id))?;
                // Full overwrite, not a field-level merge.
                *slot = proposal_task;
            }
        }

        self.backlog.save(principal, &backlog).await?;

        list.proposals[index].status = ProposalStatus::Approved;
        self.proposals.save(&list).await?;

        let approved = list.proposals[index].clone();
        info!(proposal_id = %approved.id, "approved proposal");
        Ok(approved)
    }

    /// Rejects a pending proposal. The backlog is untouched and there is no
    /// un-reject.
    pub async fn reject(&self, proposal_id: &str) -> Result<Proposal> {
        let _guard = self.locks.lock_proposals().await;
        let mut list = self.proposals.load().await?;
        let index = self.locate_pending(&list, proposal_id)?;

        list.proposals[index].status = ProposalStatus::Rejected;
        self.proposals.save(&list).await?;

        let rejected = list.proposals[index].clone();
        info!(proposal_id = %rejected.id, "rejected proposal");
        Ok(rejected)
    }

    /// Replaces a pending proposal's task payload. Its kind, original task
    /// and status are unchanged; the reviewer still has to approve or
    /// reject it afterward.
    pub async fn modify(&self, proposal_id: &str, modified_task: Task) -> Result<Proposal> {
        let _guard = self.locks.lock_proposals().await;
        let mut list = self.proposals.load().await?;
        let index = self.locate_pending(&list, proposal_id)?;

        list.proposals[index].task = modified_task;
        self.proposals.save(&list).await?;

        let modified = list.proposals[index].clone();
        info!(proposal_id = %modified.id, "modified proposal");
        Ok(modified)
    }

    /// Locates a proposal and enforces the pending-only transition rule.
    /// Non-pending targets always fail, never silently no-op; this is what
    /// protects against double-approval races between reviewers.
    fn locate_pending(&self, list: &ProposalList, proposal_id: &str) -> Result<usize> {
        let index = list
            .position(proposal_id)
            .ok_or_else(|| TriageError::not_found("proposal", proposal_id))?;

        if !list.proposals[index].is_pending() {
            return Err(TriageError::invalid_state(format!(
                "proposal '{proposal_id}' is not pending"
            )));
        }

        Ok(index)
    }
}
