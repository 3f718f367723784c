//! Response envelopes shared by the HTTP gateway and the CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Robot;
use crate::schedule::RobotGroup;

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Result of an advisory conflict check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConflictResponse {
    pub conflict: bool,
    /// Ids of the overlapping records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub with: Vec<i64>,
}

/// Records written by a create call, plus whether any of them overlap.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateResponse {
    pub created: Vec<Robot>,
    pub conflict: bool,
}

/// Record after an update, plus whether its new slot overlaps another record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateResponse {
    pub updated: Robot,
    pub conflict: bool,
}

/// Ids removed by a delete call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: Vec<i64>,
}

/// One planner week.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeekResponse {
    pub week: u8,
    pub groups: Vec<RobotGroup>,
}
