use crate::cli::GlobalFlags;
use crate::cli::root_commands::TimelineArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot timeline`.
pub async fn handle(args: &TimelineArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let blocks = ctx.service.day_timeline(args.day).await?;
    output(&blocks, flags.format)
}
