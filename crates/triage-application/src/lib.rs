pub mod backlog_service;
pub mod collection_locks;
pub mod proposal_service;

pub use backlog_service::{BacklogService, TaskUpdate};
pub use collection_locks::CollectionLocks;
pub use proposal_service::{CreateProposalRequest, ProposalService};
