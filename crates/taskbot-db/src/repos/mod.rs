//! Repository modules implementing store operations.
//!
//! Each module adds methods to `RobotService` via `impl RobotService` blocks.

pub mod robot;
pub mod schedule;
