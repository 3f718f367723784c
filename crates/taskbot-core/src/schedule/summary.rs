//! Monthly usage totals.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Robot;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NameUsage {
    pub name: String,
    pub minutes: i64,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total: usize,
    /// Records flagged `manual`.
    pub active: usize,
    pub usage: Vec<NameUsage>,
}

/// Total scheduled minutes across every record named `name`.
#[must_use]
pub fn monthly_minutes(robots: &[Robot], name: &str) -> i64 {
    robots
        .iter()
        .filter(|r| r.name == name)
        .map(|r| r.start_time.minutes_until(r.end_time))
        .sum()
}

#[must_use]
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[must_use]
pub fn summarize(robots: &[Robot]) -> ScheduleSummary {
    let mut per_name: BTreeMap<&str, i64> = BTreeMap::new();
    for robot in robots {
        *per_name.entry(robot.name.as_str()).or_default() +=
            robot.start_time.minutes_until(robot.end_time);
    }

    ScheduleSummary {
        total: robots.len(),
        active: robots.iter().filter(|r| r.manual).count(),
        usage: per_name
            .into_iter()
            .map(|(name, minutes)| NameUsage {
                name: name.to_string(),
                minutes,
                formatted: format_duration(minutes),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn robot(id: i64, name: &str, start: &str, end: &str, manual: bool) -> Robot {
        Robot {
            id,
            name: name.into(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            color: "#F59E0B".into(),
            manual,
            day: u8::try_from(id).unwrap(),
            is_daily: false,
            description: None,
        }
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(45), "0h 45m");
        assert_eq!(format_duration(135), "2h 15m");
    }

    #[test]
    fn monthly_minutes_sums_by_name() {
        let robots = vec![
            robot(1, "Sync", "09:00", "10:30", false),
            robot(2, "Sync", "09:00", "10:30", false),
            robot(3, "Backup", "01:00", "02:00", false),
        ];
        assert_eq!(monthly_minutes(&robots, "Sync"), 180);
        assert_eq!(monthly_minutes(&robots, "Missing"), 0);
    }

    #[test]
    fn summary_counts_and_sorts() {
        let robots = vec![
            robot(1, "Sync", "09:00", "09:45", true),
            robot(2, "Backup", "01:00", "02:00", false),
            robot(3, "Sync", "09:00", "09:45", true),
        ];
        let summary = summarize(&robots);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(
            summary.usage,
            vec![
                NameUsage {
                    name: "Backup".into(),
                    minutes: 60,
                    formatted: "1h 0m".into(),
                },
                NameUsage {
                    name: "Sync".into(),
                    minutes: 90,
                    formatted: "1h 30m".into(),
                },
            ]
        );
    }
}
