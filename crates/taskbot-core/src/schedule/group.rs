//! Weekly planner grouping.
//!
//! Records that differ only by day collapse into one `RobotGroup` carrying
//! the days it occupies and the ids behind it. Groups are a view; writes
//! still go through the individual ids.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::entities::Robot;

/// Week numbers shown by the planner.
pub const WEEKS: RangeInclusive<u8> = 1..=4;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RobotGroup {
    pub name: String,
    #[schemars(with = "String")]
    pub start_time: ClockTime,
    #[schemars(with = "String")]
    pub end_time: ClockTime,
    pub color: String,
    pub manual: bool,
    pub description: Option<String>,
    pub is_daily: bool,
    /// Distinct days, ascending.
    pub days: Vec<u8>,
    /// Every underlying record id, ascending.
    pub ids: Vec<i64>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey<'a> {
    name: &'a str,
    start_time: ClockTime,
    end_time: ClockTime,
    color: &'a str,
    manual: bool,
    description: &'a str,
    is_daily: bool,
}

impl<'a> GroupKey<'a> {
    fn of(robot: &'a Robot) -> Self {
        Self {
            name: &robot.name,
            start_time: robot.start_time,
            end_time: robot.end_time,
            color: &robot.color,
            manual: robot.manual,
            description: robot.description.as_deref().unwrap_or_default(),
            is_daily: robot.is_daily,
        }
    }
}

/// Map a day of the month to its planner week.
///
/// Days 1-7, 8-14, 15-21 and 22-28 are weeks 1-4. Anything else, including
/// days 29 and 30, falls back to week 1.
#[must_use]
pub const fn week_of_day(day: u8) -> u8 {
    match day {
        8..=14 => 2,
        15..=21 => 3,
        22..=28 => 4,
        _ => 1,
    }
}

/// Partition records into groups. Output is sorted by group key, so input
/// order never matters.
#[must_use]
pub fn group_robots<'a, I>(robots: I) -> Vec<RobotGroup>
where
    I: IntoIterator<Item = &'a Robot>,
{
    let mut grouped: BTreeMap<GroupKey<'a>, (&'a Robot, BTreeSet<u8>, Vec<i64>)> = BTreeMap::new();
    for robot in robots {
        let entry = grouped
            .entry(GroupKey::of(robot))
            .or_insert_with(|| (robot, BTreeSet::new(), Vec::new()));
        entry.1.insert(robot.day);
        entry.2.push(robot.id);
    }

    grouped
        .into_values()
        .map(|(first, days, mut ids)| {
            ids.sort_unstable();
            RobotGroup {
                name: first.name.clone(),
                start_time: first.start_time,
                end_time: first.end_time,
                color: first.color.clone(),
                manual: first.manual,
                description: first.description.clone().filter(|d| !d.is_empty()),
                is_daily: first.is_daily,
                days: days.into_iter().collect(),
                ids,
            }
        })
        .collect()
}

/// Groups for one planner week: records banded into `week` plus daily ones.
#[must_use]
pub fn week_groups(robots: &[Robot], week: u8) -> Vec<RobotGroup> {
    group_robots(
        robots
            .iter()
            .filter(|r| week_of_day(r.day) == week || r.is_daily),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn robot(id: i64, name: &str, day: u8) -> Robot {
        Robot {
            id,
            name: name.into(),
            start_time: "08:00".parse().unwrap(),
            end_time: "09:00".parse().unwrap(),
            color: "#EF4444".into(),
            manual: false,
            day,
            is_daily: false,
            description: None,
        }
    }

    #[rstest]
    #[case(1, 1)]
    #[case(5, 1)]
    #[case(7, 1)]
    #[case(8, 2)]
    #[case(10, 2)]
    #[case(14, 2)]
    #[case(15, 3)]
    #[case(21, 3)]
    #[case(22, 4)]
    #[case(28, 4)]
    #[case(29, 1)]
    #[case(30, 1)]
    fn week_banding(#[case] day: u8, #[case] week: u8) {
        assert_eq!(week_of_day(day), week);
    }

    #[test]
    fn identical_records_collapse() {
        let robots = vec![robot(3, "Sync", 9), robot(1, "Sync", 2), robot(2, "Sync", 5)];
        let groups = group_robots(&robots);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].days, vec![2, 5, 9]);
        assert_eq!(groups[0].ids, vec![1, 2, 3]);
    }

    #[test]
    fn any_differing_field_splits_groups() {
        let base = robot(1, "Sync", 1);
        let mut other_color = robot(2, "Sync", 2);
        other_color.color = "#10B981".into();
        let mut manual = robot(3, "Sync", 3);
        manual.manual = true;
        let mut described = robot(4, "Sync", 4);
        described.description = Some("nightly".into());
        let mut later = robot(5, "Sync", 5);
        later.end_time = "09:30".parse().unwrap();

        let groups = group_robots(&[base, other_color, manual, described, later]);
        assert_eq!(groups.len(), 5);
    }

    #[test]
    fn empty_and_missing_descriptions_share_a_group() {
        let mut empty = robot(1, "Sync", 1);
        empty.description = Some(String::new());
        let missing = robot(2, "Sync", 2);
        let groups = group_robots(&[empty, missing]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].description, None);
    }

    #[test]
    fn grouping_is_a_partition() {
        let robots: Vec<Robot> = (1..=12)
            .map(|id| robot(id, if id % 3 == 0 { "A" } else { "B" }, u8::try_from(id).unwrap()))
            .collect();
        let groups = group_robots(&robots);
        let mut ids: Vec<i64> = groups.iter().flat_map(|g| g.ids.clone()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=12).collect::<Vec<i64>>());
    }

    #[test]
    fn duplicate_day_keeps_every_id() {
        let robots = vec![robot(1, "Sync", 4), robot(2, "Sync", 4)];
        let groups = group_robots(&robots);
        assert_eq!(groups[0].days, vec![4]);
        assert_eq!(groups[0].ids, vec![1, 2]);
    }

    #[test]
    fn grouping_is_order_independent() {
        let robots = vec![
            robot(1, "Alpha", 3),
            robot(2, "Beta", 1),
            robot(3, "Alpha", 1),
            robot(4, "Beta", 20),
            robot(5, "Gamma", 11),
        ];
        let mut reversed = robots.clone();
        reversed.reverse();
        let mut rotated = robots.clone();
        rotated.rotate_left(2);

        let expected = group_robots(&robots);
        assert_eq!(group_robots(&reversed), expected);
        assert_eq!(group_robots(&rotated), expected);
    }

    #[test]
    fn week_groups_include_daily_records() {
        let mut daily = robot(9, "Heartbeat", 30);
        daily.is_daily = true;
        let robots = vec![robot(1, "Sync", 2), robot(2, "Sync", 9), daily];

        let week2 = week_groups(&robots, 2);
        let names: Vec<&str> = week2.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Heartbeat", "Sync"]);
        assert_eq!(week2[1].days, vec![9]);

        let week1 = week_groups(&robots, 1);
        assert_eq!(week1.iter().find(|g| g.name == "Sync").unwrap().days, vec![2]);
    }
}
