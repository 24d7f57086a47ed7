use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use triage_core::TriageError;

mod commands;

use commands::CommandContext;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Backlog tracking with a human-reviewed AI proposal workflow", long_about = None)]
struct Cli {
    /// Authenticated user id; omit to work on the shared local backlog
    #[arg(long, global = true)]
    user: Option<String>,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and edit the task backlog directly
    Backlog {
        #[command(subcommand)]
        action: BacklogAction,
    },
    /// Create and review task proposals
    Proposal {
        #[command(subcommand)]
        action: ProposalAction,
    },
}

#[derive(Subcommand)]
enum BacklogAction {
    /// Print the current backlog
    Show,
    /// Add a task directly
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Apply a partial update to a task
    Update {
        task_id: String,
        /// JSON object of fields to overwrite, e.g. '{"status":"Done"}'
        updates: String,
    },
    /// Extract tasks from free text and add them to the backlog
    Extract { text: String },
    /// Provision a backlog document for the principal
    Init,
}

#[derive(Subcommand)]
enum ProposalAction {
    /// List all proposals
    List,
    /// Submit a proposal; payload is JSON: {"type", "task", "original_task"?}
    Create { payload: String },
    /// Approve a pending proposal and apply it to the backlog
    Approve { proposal_id: String },
    /// Reject a pending proposal
    Reject { proposal_id: String },
    /// Replace a pending proposal's task payload with the given JSON task
    Modify { proposal_id: String, task: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> Result<(), TriageError> {
    let ctx = CommandContext::build(cli.user, cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Backlog { action } => match action {
            BacklogAction::Show => commands::backlog::show(&ctx).await,
            BacklogAction::Add { title, description } => {
                commands::backlog::add(&ctx, &title, description.as_deref()).await
            }
            BacklogAction::Update { task_id, updates } => {
                commands::backlog::update(&ctx, &task_id, &updates).await
            }
            BacklogAction::Extract { text } => commands::backlog::extract(&ctx, &text).await,
            BacklogAction::Init => commands::backlog::init(&ctx).await,
        },
        Commands::Proposal { action } => match action {
            ProposalAction::List => commands::proposal::list(&ctx).await,
            ProposalAction::Create { payload } => commands::proposal::create(&ctx, &payload).await,
            ProposalAction::Approve { proposal_id } => {
                commands::proposal::approve(&ctx, &proposal_id).await
            }
            ProposalAction::Reject { proposal_id } => {
                commands::proposal::reject(&ctx, &proposal_id).await
            }
            ProposalAction::Modify { proposal_id, task } => {
                commands::proposal::modify(&ctx, &proposal_id, &task).await
            }
        },
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the user-facing failure message. Storage-class failures get a
/// generic line; the detail (which may include paths) goes to the log only.
fn report(err: &TriageError) {
    if err.is_caller_fault() {
        eprintln!("error: {err}");
    } else {
        tracing::error!(error = %err, "operation failed");
        eprintln!("error: the storage backend failed; see the log for details");
    }
}

/// Maps error kinds to exit codes: caller faults (the 4xx-equivalents) get
/// distinct small codes, backend faults (5xx-equivalent) share one.
fn exit_code(err: &TriageError) -> u8 {
    match err {
        TriageError::Validation { .. } => 2,
        TriageError::NotFound { .. } => 3,
        TriageError::InvalidState(_) => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(&TriageError::validation("title", "empty")), 2);
        assert_eq!(exit_code(&TriageError::not_found("task", "T0001")), 3);
        assert_eq!(exit_code(&TriageError::invalid_state("not pending")), 4);
        assert_eq!(exit_code(&TriageError::storage("down")), 5);
        assert_eq!(exit_code(&TriageError::io("disk full")), 5);
    }
}
