//! Proposal review subcommands.

use super::{parse_json_arg, print_json, CommandContext};
use triage_application::CreateProposalRequest;
use triage_core::task::Task;
use triage_core::Result;

pub async fn list(ctx: &CommandContext) -> Result<()> {
    let proposals = ctx.proposals.list().await?;
    print_json(&proposals)
}

pub async fn create(ctx: &CommandContext, payload: &str) -> Result<()> {
    let request: CreateProposalRequest = parse_json_arg("payload", payload)?;
    let proposal = ctx.proposals.create(request).await?;
    print_json(&proposal)
}

pub async fn approve(ctx: &CommandContext, proposal_id: &str) -> Result<()> {
    let proposal = ctx.proposals.approve(&ctx.principal, proposal_id).await?;
    print_json(&proposal)
}

pub async fn reject(ctx: &CommandContext, proposal_id: &str) -> Result<()> {
    let proposal = ctx.proposals.reject(proposal_id).await?;
    print_json(&proposal)
}

pub async fn modify(ctx: &CommandContext, proposal_id: &str, task: &str) -> Result<()> {
    let task: Task = parse_json_arg("task", task)?;
    let proposal = ctx.proposals.modify(proposal_id, task).await?;
    print_json(&proposal)
}
