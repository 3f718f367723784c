use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let robots = match args.day {
        Some(day) => ctx.service.list_robots_for_day(day).await?,
        None => ctx.service.list_robots().await?,
    };
    output(&robots, flags.format)
}
