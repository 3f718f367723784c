//! Time-conflict detection.
//!
//! Intervals are half-open `[start, end)`: two records conflict when
//! `s1 < e2 && e1 > s2`, so back-to-back runs (`09:00-10:00`, `10:00-11:00`)
//! do not. The check is advisory; callers warn and carry on.

use crate::clock::ClockTime;
use crate::days;
use crate::entities::{NewRobot, Robot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Interval {
    #[must_use]
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn of(robot: &Robot) -> Self {
        Self::new(robot.start_time, robot.end_time)
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A candidate interval to test against existing records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictQuery {
    pub day: u8,
    pub interval: Interval,
    /// Record to ignore, for edit-in-place checks.
    pub exclude_id: Option<i64>,
    /// Check every day of the cycle instead of `day` alone.
    pub daily: bool,
}

impl ConflictQuery {
    #[must_use]
    pub const fn new(day: u8, interval: Interval) -> Self {
        Self {
            day,
            interval,
            exclude_id: None,
            daily: false,
        }
    }

    #[must_use]
    pub const fn excluding(mut self, id: i64) -> Self {
        self.exclude_id = Some(id);
        self
    }

    #[must_use]
    pub const fn daily(mut self, daily: bool) -> Self {
        self.daily = daily;
        self
    }

    /// Query for a record about to be created.
    #[must_use]
    pub const fn for_draft(draft: &NewRobot) -> Self {
        Self::new(draft.day, Interval::new(draft.start_time, draft.end_time)).daily(draft.is_daily)
    }

    fn days(&self) -> Vec<u8> {
        if self.daily {
            days().collect()
        } else {
            vec![self.day]
        }
    }

    /// Records that share `day` with the candidate: same slot or daily.
    fn candidates<'a>(&self, robots: &'a [Robot], day: u8) -> impl Iterator<Item = &'a Robot> {
        let exclude = self.exclude_id;
        robots
            .iter()
            .filter(move |r| (r.day == day || r.is_daily) && Some(r.id) != exclude)
    }
}

/// Whether the candidate overlaps any existing record.
#[must_use]
pub fn has_conflict(robots: &[Robot], query: &ConflictQuery) -> bool {
    query.days().into_iter().any(|day| {
        query
            .candidates(robots, day)
            .any(|r| query.interval.overlaps(&Interval::of(r)))
    })
}

/// Every existing record the candidate overlaps, without duplicates.
///
/// Ordered by the first day on which each overlap is found.
#[must_use]
pub fn conflicting<'a>(robots: &'a [Robot], query: &ConflictQuery) -> Vec<&'a Robot> {
    let mut hits: Vec<&Robot> = Vec::new();
    for day in query.days() {
        for robot in query.candidates(robots, day) {
            if query.interval.overlaps(&Interval::of(robot)) && !hits.iter().any(|h| h.id == robot.id)
            {
                hits.push(robot);
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn robot(id: i64, day: u8, start: &str, end: &str) -> Robot {
        Robot {
            id,
            name: format!("robot-{id}"),
            start_time: t(start),
            end_time: t(end),
            color: "#3B82F6".into(),
            manual: false,
            day,
            is_daily: false,
            description: None,
        }
    }

    fn query(day: u8, start: &str, end: &str) -> ConflictQuery {
        ConflictQuery::new(day, Interval::new(t(start), t(end)))
    }

    #[rstest]
    #[case("09:00", "10:00", "10:00", "11:00", false)]
    #[case("10:00", "11:00", "09:00", "10:00", false)]
    #[case("09:00", "10:00", "11:00", "12:00", false)]
    #[case("09:00", "10:00", "09:30", "10:30", true)]
    #[case("09:30", "10:30", "09:00", "10:00", true)]
    #[case("09:00", "12:00", "10:00", "11:00", true)]
    #[case("10:00", "11:00", "09:00", "12:00", true)]
    #[case("09:00", "10:00", "09:00", "10:00", true)]
    fn interval_overlap(
        #[case] s1: &str,
        #[case] e1: &str,
        #[case] s2: &str,
        #[case] e2: &str,
        #[case] expected: bool,
    ) {
        let a = Interval::new(t(s1), t(e1));
        let b = Interval::new(t(s2), t(e2));
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected, "overlap must be symmetric");
    }

    #[test]
    fn only_same_day_records_count() {
        let robots = vec![robot(1, 5, "09:00", "10:00")];
        assert!(has_conflict(&robots, &query(5, "09:30", "09:45")));
        assert!(!has_conflict(&robots, &query(6, "09:30", "09:45")));
    }

    #[test]
    fn daily_flagged_records_apply_to_every_day() {
        let mut daily = robot(1, 1, "09:00", "10:00");
        daily.is_daily = true;
        let robots = vec![daily];
        assert!(has_conflict(&robots, &query(17, "09:30", "11:00")));
    }

    #[test]
    fn excluded_id_is_ignored() {
        let robots = vec![robot(1, 5, "09:00", "10:00"), robot(2, 5, "13:00", "14:00")];
        let edit = query(5, "09:15", "09:45").excluding(1);
        assert!(!has_conflict(&robots, &edit));
        let edit = query(5, "13:30", "14:30").excluding(1);
        assert!(has_conflict(&robots, &edit));
    }

    #[test]
    fn daily_candidate_checks_every_day() {
        let robots = vec![robot(1, 29, "22:00", "23:00")];
        let candidate = query(1, "22:30", "23:30");
        assert!(!has_conflict(&robots, &candidate));
        assert!(has_conflict(&robots, &candidate.daily(true)));
    }

    #[test]
    fn empty_store_never_conflicts() {
        assert!(!has_conflict(&[], &query(1, "00:00", "23:59").daily(true)));
    }

    #[test]
    fn conflicting_lists_each_record_once() {
        let mut daily = robot(3, 1, "09:00", "09:30");
        daily.is_daily = true;
        let robots = vec![
            robot(1, 4, "09:00", "10:00"),
            robot(2, 9, "09:10", "09:20"),
            daily,
            robot(4, 4, "10:00", "11:00"),
        ];
        let hits = conflicting(&robots, &query(4, "09:00", "10:00").daily(true));
        let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn for_draft_carries_daily_flag() {
        let draft = NewRobot {
            name: "n".into(),
            start_time: t("08:00"),
            end_time: t("09:00"),
            color: "#fff".into(),
            manual: false,
            day: 2,
            is_daily: true,
            description: None,
        };
        let q = ConflictQuery::for_draft(&draft);
        assert!(q.daily);
        assert_eq!(q.day, 2);
        assert_eq!(q.exclude_id, None);
    }
}
