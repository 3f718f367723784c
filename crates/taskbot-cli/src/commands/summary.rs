use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot summary`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = ctx.service.summary().await?;
    output(&summary, flags.format)
}
