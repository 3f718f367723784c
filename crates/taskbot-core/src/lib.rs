//! # taskbot-core
//!
//! Core types, validation, and schedule logic for TaskBot.
//!
//! This crate provides the foundational types shared across all TaskBot crates:
//! - The `Robot` entity and its creation draft (`NewRobot`)
//! - `ClockTime`, the `"HH:MM"` wall-clock type used for start/end times
//! - Cross-cutting error types
//! - Schedule views: conflict detection, weekly grouping, day timelines,
//!   and monthly usage summaries
//! - Response envelopes shared by the HTTP gateway and the CLI

pub mod clock;
pub mod entities;
pub mod errors;
pub mod responses;
pub mod schedule;

/// Number of day slots in a scheduling cycle.
pub const DAYS_IN_CYCLE: u8 = 30;

/// Default maximum description length, in characters.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 120;

/// Description length shown by compact (timeline) views.
pub const COMPACT_DESCRIPTION_LIMIT: usize = 80;

/// All valid day slots, `1..=30`.
#[must_use]
pub const fn days() -> std::ops::RangeInclusive<u8> {
    1..=DAYS_IN_CYCLE
}
