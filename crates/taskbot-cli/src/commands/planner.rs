use crate::cli::GlobalFlags;
use crate::cli::root_commands::PlannerArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot planner`.
pub async fn handle(args: &PlannerArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let weeks = ctx.service.planner(args.week).await?;
    output(&weeks, flags.format)
}
