//! Wall-clock time of day in `"HH:MM"` form.
//!
//! Start and end times carry no calendar date; only the time of day is ever
//! compared. `ClockTime` wraps `chrono::NaiveTime` so comparisons and
//! durations use chrono arithmetic, while the wire and storage format stays
//! the zero-padded `"HH:MM"` string.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

const FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build a time from hour (0-23) and minute (0-59).
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Signed number of minutes from `self` to `end`.
    ///
    /// Negative when `end` is earlier in the day.
    #[must_use]
    pub fn minutes_until(self, end: Self) -> i64 {
        end.0.signed_duration_since(self.0).num_minutes()
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, FORMAT)
            .map(Self)
            .map_err(|_| CoreError::validation(format!("invalid time '{trimmed}': expected HH:MM")))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
