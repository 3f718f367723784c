//! Shared test utilities for taskbot-db unit tests.

use taskbot_core::entities::NewRobot;

use crate::service::RobotService;

/// Create an in-memory service.
pub async fn test_service() -> RobotService {
    RobotService::new_local(":memory:").await.unwrap()
}

/// A valid single-day draft.
pub fn draft(name: &str, day: u8, start: &str, end: &str) -> NewRobot {
    NewRobot {
        name: name.to_string(),
        start_time: start.parse().unwrap(),
        end_time: end.parse().unwrap(),
        color: "#3B82F6".to_string(),
        manual: false,
        day,
        is_daily: false,
        description: None,
    }
}
