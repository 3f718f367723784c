use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot toggle-manual`.
pub async fn handle(args: &IdsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let robots = ctx.service.toggle_manual(&args.ids).await?;
    output(&robots, flags.format)
}
