use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::errors::CoreError;
use crate::{DAYS_IN_CYCLE, days};

/// A scheduled robot run occupying one day slot of the 30-day cycle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub id: i64,
    pub name: String,
    #[schemars(with = "String")]
    pub start_time: ClockTime,
    #[schemars(with = "String")]
    pub end_time: ClockTime,
    pub color: String,
    pub manual: bool,
    pub day: u8,
    /// Always `false` once stored; daily requests are expanded at write time.
    #[serde(default)]
    pub is_daily: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Robot {
    /// The editable fields of this record, as a draft.
    #[must_use]
    pub fn to_draft(&self) -> NewRobot {
        NewRobot {
            name: self.name.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color.clone(),
            manual: self.manual,
            day: self.day,
            is_daily: self.is_daily,
            description: self.description.clone(),
        }
    }
}

/// A robot record that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewRobot {
    pub name: String,
    #[schemars(with = "String")]
    pub start_time: ClockTime,
    #[schemars(with = "String")]
    pub end_time: ClockTime,
    pub color: String,
    #[serde(default)]
    pub manual: bool,
    pub day: u8,
    #[serde(default)]
    pub is_daily: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewRobot {
    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first field that fails.
    pub fn validate(&self, description_limit: usize) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        if self.color.trim().is_empty() {
            return Err(CoreError::validation("color must not be empty"));
        }
        if !days().contains(&self.day) {
            return Err(CoreError::validation(format!(
                "day must be between 1 and {DAYS_IN_CYCLE}, got {}",
                self.day
            )));
        }
        if self.end_time <= self.start_time {
            return Err(CoreError::validation(format!(
                "endTime {} must be after startTime {}",
                self.end_time, self.start_time
            )));
        }
        if let Some(description) = &self.description {
            let len = description.chars().count();
            if len > description_limit {
                return Err(CoreError::validation(format!(
                    "description is {len} characters, limit is {description_limit}"
                )));
            }
        }
        Ok(())
    }

    /// Expand into one draft per day of the cycle.
    ///
    /// Every copy has `is_daily = false`; the flag only exists on requests.
    #[must_use]
    pub fn expand_daily(&self) -> Vec<Self> {
        days()
            .map(|day| Self {
                day,
                is_daily: false,
                ..self.clone()
            })
            .collect()
    }

    /// Empty descriptions are stored as NULL.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.description.as_deref().is_some_and(|d| d.trim().is_empty()) {
            self.description = None;
        }
        self
    }
}
