pub mod backlog;
pub mod proposal;

use std::path::Path;
use std::sync::Arc;
use triage_application::{BacklogService, CollectionLocks, ProposalService};
use triage_core::principal::Principal;
use triage_core::{Result, TriageError};
use triage_infrastructure::{select_backlog_repository, FileProposalRepository, TriagePaths};

/// Everything a command needs: the resolved principal and the two services,
/// wired against the backend that principal selects.
pub struct CommandContext {
    pub principal: Principal,
    pub backlog: BacklogService,
    pub proposals: ProposalService,
}

impl CommandContext {
    /// Resolves the principal from the CLI flags and wires the services.
    /// The storage backend is selected here, once, and nowhere else.
    pub fn build(user: Option<String>, data_dir: Option<&Path>) -> Result<Self> {
        let principal = match user {
            Some(uid) => Principal::user(uid),
            None => Principal::Local,
        };

        let paths = TriagePaths::new(data_dir)?;
        let backlog_repo = select_backlog_repository(&principal, &paths);
        let proposal_repo = Arc::new(FileProposalRepository::new(&paths));
        let locks = CollectionLocks::new();

        Ok(Self {
            principal,
            backlog: BacklogService::new(backlog_repo.clone(), locks.clone()),
            proposals: ProposalService::new(proposal_repo, backlog_repo, locks),
        })
    }
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(TriageError::from)?;
    println!("{rendered}");
    Ok(())
}

/// Parses a JSON argument, reporting malformed input as a validation error
/// on the named field rather than a bare parse failure.
pub(crate) fn parse_json_arg<T: serde::de::DeserializeOwned>(
    field: &str,
    raw: &str,
) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| TriageError::validation(field, format!("invalid JSON: {e}")))
}
