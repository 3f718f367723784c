//! Schedule views computed over the current store contents.
//!
//! Thin wrappers that load records and hand them to `taskbot_core::schedule`.

use taskbot_core::entities::Robot;
use taskbot_core::responses::WeekResponse;
use taskbot_core::schedule::{
    self, ConflictQuery, ScheduleSummary, TimelineBlock, WEEKS,
};

use crate::error::DatabaseError;
use crate::service::RobotService;

impl RobotService {
    /// Records the candidate would overlap. Empty means no conflict.
    pub async fn conflicts(&self, query: &ConflictQuery) -> Result<Vec<Robot>, DatabaseError> {
        let robots = self.list_robots().await?;
        Ok(schedule::conflicting(&robots, query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn has_conflict(&self, query: &ConflictQuery) -> Result<bool, DatabaseError> {
        let robots = self.list_robots().await?;
        Ok(schedule::has_conflict(&robots, query))
    }

    /// Planner groups for one week, or for every week when `week` is `None`.
    pub async fn planner(&self, week: Option<u8>) -> Result<Vec<WeekResponse>, DatabaseError> {
        let robots = self.list_robots().await?;
        let weeks: Vec<u8> = week.map_or_else(|| WEEKS.collect(), |w| vec![w]);
        Ok(weeks
            .into_iter()
            .map(|week| WeekResponse {
                week,
                groups: schedule::week_groups(&robots, week),
            })
            .collect())
    }

    pub async fn day_timeline(&self, day: u8) -> Result<Vec<TimelineBlock>, DatabaseError> {
        let robots = self.list_robots_for_day(day).await?;
        Ok(schedule::day_timeline(&robots, day))
    }

    pub async fn summary(&self) -> Result<ScheduleSummary, DatabaseError> {
        let robots = self.list_robots().await?;
        Ok(schedule::summarize(&robots))
    }
}

#[cfg(test)]
mod tests {
    use taskbot_core::entities::NewRobot;
    use taskbot_core::schedule::Interval;

    use super::*;
    use crate::test_support::{draft, test_service};

    fn query(day: u8, start: &str, end: &str) -> ConflictQuery {
        ConflictQuery::new(day, Interval::new(start.parse().unwrap(), end.parse().unwrap()))
    }

    #[tokio::test]
    async fn conflicts_reflect_stored_records() {
        let svc = test_service().await;
        let existing = svc.create_robot(draft("Sync", 3, "09:00", "10:00")).await.unwrap();

        assert!(svc.has_conflict(&query(3, "09:30", "10:30")).await.unwrap());
        assert!(!svc.has_conflict(&query(3, "10:00", "11:00")).await.unwrap());

        let hits = svc.conflicts(&query(3, "08:00", "09:01")).await.unwrap();
        assert_eq!(hits, vec![existing.clone()]);

        let edit = query(3, "09:15", "09:45").excluding(existing.id);
        assert!(svc.conflicts(&edit).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn planner_groups_daily_expansion() {
        let svc = test_service().await;
        svc.create(NewRobot {
            is_daily: true,
            ..draft("Heartbeat", 1, "06:00", "06:15")
        })
        .await
        .unwrap();
        svc.create_robot(draft("Report", 9, "17:00", "18:00")).await.unwrap();

        let weeks = svc.planner(None).await.unwrap();
        assert_eq!(weeks.len(), 4);

        let week1 = &weeks[0];
        assert_eq!(week1.week, 1);
        assert_eq!(week1.groups.len(), 1);
        // Days 29 and 30 fall back into week 1.
        assert_eq!(week1.groups[0].days, vec![1, 2, 3, 4, 5, 6, 7, 29, 30]);

        let week2 = svc.planner(Some(2)).await.unwrap();
        let names: Vec<&str> = week2[0].groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Heartbeat", "Report"]);
    }

    #[tokio::test]
    async fn timeline_and_summary() {
        let svc = test_service().await;
        svc.create_robot(draft("Sync", 5, "14:20", "14:30")).await.unwrap();
        svc.create_robot(NewRobot {
            manual: true,
            ..draft("Sync", 6, "09:00", "10:00")
        })
        .await
        .unwrap();

        let blocks = svc.day_timeline(5).await.unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!((blocks[0].hour, blocks[0].offset, blocks[0].height), (14, 20, 30));

        let summary = svc.summary().await.unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.usage[0].formatted, "1h 10m");
    }
}
