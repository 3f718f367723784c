use taskbot_core::responses::ConflictResponse;
use taskbot_core::schedule::{ConflictQuery, Interval};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskbot check`.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx).await?;
    output(&response, flags.format)
}

pub async fn run(args: &CheckArgs, ctx: &AppContext) -> anyhow::Result<ConflictResponse> {
    anyhow::ensure!(
        args.end > args.start,
        "end {} must be after start {}",
        args.end,
        args.start
    );
    let mut query =
        ConflictQuery::new(args.day.unwrap_or(1), Interval::new(args.start, args.end)).daily(args.daily);
    if let Some(id) = args.exclude {
        query = query.excluding(id);
    }

    let hits = ctx.service.conflicts(&query).await?;
    Ok(ConflictResponse {
        conflict: !hits.is_empty(),
        with: hits.iter().map(|r| r.id).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, draft};
    use pretty_assertions::assert_eq;

    fn args(day: Option<u8>, start: &str, end: &str) -> CheckArgs {
        CheckArgs {
            day,
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            exclude: None,
            daily: day.is_none(),
        }
    }

    #[tokio::test]
    async fn reports_overlapping_ids() {
        let ctx = context().await;
        let a = ctx.service.create_robot(draft("A", 3, "09:00", "10:00")).await.unwrap();
        let b = ctx.service.create_robot(draft("B", 20, "09:30", "09:40")).await.unwrap();

        let same_day = run(&args(Some(3), "09:30", "11:00"), &ctx).await.unwrap();
        assert_eq!(same_day.with, vec![a.id]);

        let every_day = run(&args(None, "09:35", "09:36"), &ctx).await.unwrap();
        assert!(every_day.conflict);
        assert_eq!(every_day.with, vec![a.id, b.id]);

        let excluded = run(
            &CheckArgs {
                exclude: Some(a.id),
                ..args(Some(3), "09:30", "11:00")
            },
            &ctx,
        )
        .await
        .unwrap();
        assert!(!excluded.conflict);
    }

    #[tokio::test]
    async fn reversed_or_empty_interval_is_an_error() {
        let ctx = context().await;
        let reversed = run(&args(Some(3), "10:00", "09:00"), &ctx).await.unwrap_err();
        assert_eq!(reversed.to_string(), "end 09:00 must be after start 10:00");
        assert!(run(&args(Some(3), "09:00", "09:00"), &ctx).await.is_err());
    }
}
