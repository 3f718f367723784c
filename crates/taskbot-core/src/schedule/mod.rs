//! Derived schedule views over a set of robot records.
//!
//! Everything here is pure: callers load records from the store and pass
//! slices in. Nothing writes back.

pub mod conflict;
pub mod group;
pub mod summary;
pub mod timeline;

pub use conflict::{ConflictQuery, Interval, conflicting, has_conflict};
pub use group::{RobotGroup, WEEKS, group_robots, week_groups, week_of_day};
pub use summary::{NameUsage, ScheduleSummary, format_duration, monthly_minutes, summarize};
pub use timeline::{MIN_BLOCK_HEIGHT, TimelineBlock, block_height, day_timeline};
