//! Entity structs for TaskBot domain objects.
//!
//! `Robot` maps to the `robots` table in the libSQL database. Wire names are
//! camelCase (`startTime`, `isDaily`) to match the HTTP API.

mod robot;

pub use robot::{NewRobot, Robot};
