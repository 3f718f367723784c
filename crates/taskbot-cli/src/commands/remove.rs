use taskbot_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot remove`. Either every id is deleted or none is.
pub async fn handle(args: &IdsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_robots(&args.ids).await?;
    output(
        &DeleteResponse {
            deleted: args.ids.clone(),
        },
        flags.format,
    )
}
