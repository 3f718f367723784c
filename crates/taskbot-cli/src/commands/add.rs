use taskbot_core::entities::NewRobot;
use taskbot_core::responses::CreateResponse;
use taskbot_core::schedule::ConflictQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot add`.
pub async fn handle(args: AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx).await?;
    output(&response, flags.format)
}

/// Create the robot (or its 30 daily copies). Overlaps are reported, not refused.
pub async fn run(args: AddArgs, ctx: &AppContext) -> anyhow::Result<CreateResponse> {
    let draft = NewRobot {
        name: args.name,
        start_time: args.start,
        end_time: args.end,
        color: args.color,
        manual: args.manual,
        day: args.day.unwrap_or(1),
        is_daily: args.daily,
        description: args.description,
    };

    let overlapping = ctx.service.conflicts(&ConflictQuery::for_draft(&draft)).await?;
    if !overlapping.is_empty() {
        let ids: Vec<i64> = overlapping.iter().map(|r| r.id).collect();
        tracing::warn!(name = %draft.name, ?ids, "new robot overlaps existing schedule");
    }

    let created = ctx.service.create(draft).await?;
    Ok(CreateResponse {
        created,
        conflict: !overlapping.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use pretty_assertions::assert_eq;

    fn args(name: &str, day: Option<u8>, start: &str, end: &str) -> AddArgs {
        AddArgs {
            name: name.into(),
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            color: "#3B82F6".into(),
            manual: false,
            description: None,
            day,
            daily: day.is_none(),
        }
    }

    #[tokio::test]
    async fn add_single_day() {
        let ctx = context().await;
        let response = run(args("Sync", Some(6), "08:00", "08:30"), &ctx).await.unwrap();
        assert_eq!(response.created.len(), 1);
        assert_eq!(response.created[0].day, 6);
        assert!(!response.conflict);
    }

    #[tokio::test]
    async fn add_daily_reports_overlap_but_still_creates() {
        let ctx = context().await;
        run(args("Sync", Some(12), "08:00", "08:30"), &ctx).await.unwrap();

        let response = run(args("Heartbeat", None, "08:15", "08:20"), &ctx).await.unwrap();
        assert!(response.conflict);
        assert_eq!(response.created.len(), 30);
        assert_eq!(ctx.service.list_robots().await.unwrap().len(), 31);
    }

    #[tokio::test]
    async fn invalid_interval_is_an_error() {
        let ctx = context().await;
        let result = run(args("Backwards", Some(1), "10:00", "09:00"), &ctx).await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("must be after"), "{message}");
    }
}
