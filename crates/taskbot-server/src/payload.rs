//! Request bodies and query strings accepted by the API.
//!
//! Bodies are deserialized leniently (every field optional) and then checked
//! here, so a missing field is reported by name instead of as a serde error.

use serde::Deserialize;
use serde_json::Value;
use taskbot_core::clock::ClockTime;
use taskbot_core::entities::NewRobot;
use taskbot_core::schedule::{ConflictQuery, Interval};
use taskbot_db::updates::robot::RobotUpdate;

use crate::error::ApiError;

/// `POST /api/robots` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRobotRequest {
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub color: Option<String>,
    pub manual: Option<bool>,
    pub day: Option<Value>,
    pub description: Option<String>,
    pub is_daily: Option<bool>,
}

impl CreateRobotRequest {
    /// Turn the body into a draft, rejecting missing or malformed fields.
    ///
    /// `day` may be omitted for daily requests; every day gets a copy anyway.
    pub fn into_draft(self) -> Result<NewRobot, ApiError> {
        let is_daily = self.is_daily.unwrap_or(false);
        let name = required("name", self.name)?;
        let start_time = parse_time("startTime", &required("startTime", self.start_time)?)?;
        let end_time = parse_time("endTime", &required("endTime", self.end_time)?)?;
        let color = required("color", self.color)?;
        let day = match self.day {
            Some(value) => parse_day(&value)?,
            None if is_daily => 1,
            None => return Err(ApiError::bad_request("day is required")),
        };

        Ok(NewRobot {
            name,
            start_time,
            end_time,
            color,
            manual: self.manual.unwrap_or(false),
            day,
            is_daily,
            description: self.description,
        })
    }
}

/// `PUT /api/robots` body: the id plus any subset of editable fields.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRobotRequest {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub update: RobotUpdate,
}

/// `DELETE /api/robots` body.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRobotRequest {
    pub id: Option<i64>,
}

/// Ids of zero are treated the same as a missing id.
pub fn require_id(id: Option<i64>) -> Result<i64, ApiError> {
    match id {
        Some(id) if id != 0 => Ok(id),
        _ => Err(ApiError::bad_request("id is required")),
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("{field} is required"))),
    }
}

fn parse_time(field: &str, raw: &str) -> Result<ClockTime, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("{field} must be HH:MM, got '{raw}'")))
}

fn parse_day(value: &Value) -> Result<u8, ApiError> {
    value
        .as_u64()
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| ApiError::bad_request(format!("day must be an integer, got {value}")))
}

/// Parse the query string of `GET /api/robots/conflicts`.
///
/// `day`, `start` and `end` are required; `exclude` and `daily` are optional.
pub fn parse_conflict_query(query: &str) -> Result<ConflictQuery, ApiError> {
    let mut day = None;
    let mut start = None;
    let mut end = None;
    let mut exclude = None;
    let mut daily = false;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = urlencoding::decode(raw)
            .map_err(|e| ApiError::bad_request(format!("invalid query value for {key}: {e}")))?;
        match key {
            "day" => {
                day = Some(value.parse::<u8>().map_err(|_| {
                    ApiError::bad_request(format!("day must be an integer, got '{value}'"))
                })?);
            }
            "start" => start = Some(parse_time("start", &value)?),
            "end" => end = Some(parse_time("end", &value)?),
            "exclude" => {
                exclude = Some(value.parse::<i64>().map_err(|_| {
                    ApiError::bad_request(format!("exclude must be an id, got '{value}'"))
                })?);
            }
            "daily" => {
                daily = match value.as_ref() {
                    "" | "true" | "1" => true,
                    "false" | "0" => false,
                    other => {
                        return Err(ApiError::bad_request(format!(
                            "daily must be true or false, got '{other}'"
                        )));
                    }
                };
            }
            _ => {}
        }
    }

    let start = start.ok_or_else(|| ApiError::bad_request("start is required"))?;
    let end = end.ok_or_else(|| ApiError::bad_request("end is required"))?;
    let day = match day {
        Some(day) => day,
        None if daily => 1,
        None => return Err(ApiError::bad_request("day is required")),
    };
    if !taskbot_core::days().contains(&day) {
        return Err(ApiError::bad_request(format!(
            "day must be between 1 and 30, got {day}"
        )));
    }
    if end <= start {
        return Err(ApiError::bad_request(format!(
            "end {end} must be after start {start}"
        )));
    }

    let mut query = ConflictQuery::new(day, Interval::new(start, end)).daily(daily);
    if let Some(id) = exclude {
        query = query.excluding(id);
    }
    Ok(query)
}
