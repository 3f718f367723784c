//! Per-day timeline layout.
//!
//! The day view is a 24-row grid, one row per hour, one pixel per minute.
//! A block sits in the row of its start hour, offset by the start minute.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::entities::Robot;

/// Shortest block, in pixels, so brief runs stay clickable.
pub const MIN_BLOCK_HEIGHT: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBlock {
    pub id: i64,
    pub name: String,
    #[schemars(with = "String")]
    pub start_time: ClockTime,
    #[schemars(with = "String")]
    pub end_time: ClockTime,
    pub color: String,
    pub manual: bool,
    pub description: Option<String>,
    /// Hour row the block starts in.
    pub hour: u32,
    /// Pixels from the top of the hour row.
    pub offset: u32,
    pub height: i64,
}

#[must_use]
pub fn block_height(robot: &Robot) -> i64 {
    robot
        .start_time
        .minutes_until(robot.end_time)
        .max(MIN_BLOCK_HEIGHT)
}

/// Blocks for records on `day`, ordered by start time then id.
#[must_use]
pub fn day_timeline(robots: &[Robot], day: u8) -> Vec<TimelineBlock> {
    let mut on_day: Vec<&Robot> = robots.iter().filter(|r| r.day == day).collect();
    on_day.sort_by_key(|r| (r.start_time, r.id));
    on_day
        .into_iter()
        .map(|r| TimelineBlock {
            id: r.id,
            name: r.name.clone(),
            start_time: r.start_time,
            end_time: r.end_time,
            color: r.color.clone(),
            manual: r.manual,
            description: r.description.clone(),
            hour: r.start_time.hour(),
            offset: r.start_time.minute(),
            height: block_height(r),
        })
        .collect()
}
