//! Proposal domain module.
//!
//! A proposal is a pending change (new task or task update) awaiting human
//! review before being merged into the backlog.
//!
//! # Module Structure
//!
//! - `model`: `Proposal`, its kind/status enums, and `ProposalList`
//! - `repository`: Proposal repository trait for persistence

mod model;
pub mod repository;

// Re-export public API
pub use model::{generate_proposal_id, Proposal, ProposalKind, ProposalList, ProposalStatus};

pub use repository::ProposalRepository;
