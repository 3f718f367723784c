use taskbot_core::responses::UpdateResponse;
use taskbot_core::schedule::ConflictQuery;
use taskbot_db::updates::robot::RobotUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot update`.
pub async fn handle(args: UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx).await?;
    output(&response, flags.format)
}

pub async fn run(args: UpdateArgs, ctx: &AppContext) -> anyhow::Result<UpdateResponse> {
    let mut builder = RobotUpdateBuilder::new();
    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if let Some(start) = args.start {
        builder = builder.start_time(start);
    }
    if let Some(end) = args.end {
        builder = builder.end_time(end);
    }
    if let Some(color) = args.color {
        builder = builder.color(color);
    }
    if let Some(manual) = args.manual {
        builder = builder.manual(manual);
    }
    if let Some(day) = args.day {
        builder = builder.day(day);
    }
    if let Some(description) = args.description {
        builder = builder.description(description);
    }

    let robot = ctx.service.update_robot(args.id, builder.build()).await?;

    let query = ConflictQuery::for_draft(&robot.to_draft()).excluding(robot.id);
    let conflict = ctx.service.has_conflict(&query).await?;
    if conflict {
        tracing::warn!(id = robot.id, day = robot.day, "updated robot overlaps existing schedule");
    }
    Ok(UpdateResponse {
        updated: robot,
        conflict,
    })
}
