use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, ctx, flags).await,
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Add(args) => commands::add::handle(args, ctx, flags).await,
        Commands::Update(args) => commands::update::handle(args, ctx, flags).await,
        Commands::Remove(args) => commands::remove::handle(&args, ctx, flags).await,
        Commands::ToggleManual(args) => commands::toggle_manual::handle(&args, ctx, flags).await,
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
        Commands::Planner(args) => commands::planner::handle(&args, ctx, flags).await,
        Commands::Timeline(args) => commands::timeline::handle(&args, ctx, flags).await,
        Commands::Summary => commands::summary::handle(ctx, flags).await,
    }
}
