//! Robot update builder.
//!
//! `RobotUpdate` doubles as the partial-field payload of `PUT /api/robots`,
//! so it deserializes from camelCase JSON. `isDaily` is never updatable.

use serde::{Deserialize, Serialize};
use taskbot_core::clock::ClockTime;
use taskbot_core::entities::Robot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    /// An empty string clears the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RobotUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The record as it would look after this update.
    #[must_use]
    pub fn apply_to(&self, robot: &Robot) -> Robot {
        Robot {
            id: robot.id,
            name: self.name.clone().unwrap_or_else(|| robot.name.clone()),
            start_time: self.start_time.unwrap_or(robot.start_time),
            end_time: self.end_time.unwrap_or(robot.end_time),
            color: self.color.clone().unwrap_or_else(|| robot.color.clone()),
            manual: self.manual.unwrap_or(robot.manual),
            day: self.day.unwrap_or(robot.day),
            is_daily: false,
            description: match &self.description {
                Some(d) if d.trim().is_empty() => None,
                Some(d) => Some(d.clone()),
                None => robot.description.clone(),
            },
        }
    }
}

pub struct RobotUpdateBuilder(RobotUpdate);

impl RobotUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(RobotUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn start_time(mut self, start_time: ClockTime) -> Self {
        self.0.start_time = Some(start_time);
        self
    }

    #[must_use]
    pub const fn end_time(mut self, end_time: ClockTime) -> Self {
        self.0.end_time = Some(end_time);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.0.color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn manual(mut self, manual: bool) -> Self {
        self.0.manual = Some(manual);
        self
    }

    #[must_use]
    pub const fn day(mut self, day: u8) -> Self {
        self.0.day = Some(day);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> RobotUpdate {
        self.0
    }
}

impl Default for RobotUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
