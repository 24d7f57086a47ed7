//! Direct backlog subcommands.

use super::{parse_json_arg, print_json, CommandContext};
use triage_application::TaskUpdate;
use triage_core::Result;

pub async fn show(ctx: &CommandContext) -> Result<()> {
    let backlog = ctx.backlog.get(&ctx.principal).await?;
    print_json(&backlog)
}

pub async fn add(ctx: &CommandContext, title: &str, description: Option<&str>) -> Result<()> {
    let task = ctx.backlog.add_task(&ctx.principal, title, description).await?;
    print_json(&task)
}

pub async fn update(ctx: &CommandContext, task_id: &str, updates: &str) -> Result<()> {
    let updates: TaskUpdate = parse_json_arg("updates", updates)?;
    let task = ctx
        .backlog
        .update_task(&ctx.principal, task_id, updates)
        .await?;
    print_json(&task)
}

pub async fn extract(ctx: &CommandContext, text: &str) -> Result<()> {
    let tasks = ctx.backlog.extract_into_backlog(&ctx.principal, text).await?;
    print_json(&tasks)
}

pub async fn init(ctx: &CommandContext) -> Result<()> {
    let backlog = ctx.backlog.initialize(&ctx.principal).await?;
    print_json(&backlog)
}
