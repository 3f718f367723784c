use clap::{Args, Subcommand};
use taskbot_core::clock::ClockTime;

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway until Ctrl-C
    Serve(ServeArgs),
    /// List robots, optionally for one day
    List(ListArgs),
    /// Schedule a robot on one day or on every day
    Add(AddArgs),
    /// Change fields of one robot
    Update(UpdateArgs),
    /// Delete robots (all or none)
    Remove(IdsArgs),
    /// Flip the manual flag of a group of robots
    ToggleManual(IdsArgs),
    /// Check whether an interval would overlap existing robots
    Check(CheckArgs),
    /// Weekly planner view, grouped by schedule
    Planner(PlannerArgs),
    /// Hour-by-hour layout for one day
    Timeline(TimelineArgs),
    /// Counts and monthly usage per robot name
    Summary,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides server.bind)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only robots scheduled on this day
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=30))]
    pub day: Option<u8>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// Start time, HH:MM
    #[arg(long)]
    pub start: ClockTime,

    /// End time, HH:MM
    #[arg(long)]
    pub end: ClockTime,

    #[arg(long, default_value = "#3B82F6")]
    pub color: String,

    /// Mark as manually triggered
    #[arg(long)]
    pub manual: bool,

    #[arg(long)]
    pub description: Option<String>,

    /// Day of the cycle, 1-30
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(1..=30),
        required_unless_present = "daily",
        conflicts_with = "daily"
    )]
    pub day: Option<u8>,

    /// Create one copy on every day of the cycle
    #[arg(long)]
    pub daily: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub start: Option<ClockTime>,

    #[arg(long)]
    pub end: Option<ClockTime>,

    #[arg(long)]
    pub color: Option<String>,

    /// true or false
    #[arg(long)]
    pub manual: Option<bool>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=30))]
    pub day: Option<u8>,

    /// New description; an empty string clears it
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdsArgs {
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<i64>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(1..=30),
        required_unless_present = "daily"
    )]
    pub day: Option<u8>,

    #[arg(long)]
    pub start: ClockTime,

    #[arg(long)]
    pub end: ClockTime,

    /// Ignore this robot, e.g. the one being edited
    #[arg(long)]
    pub exclude: Option<i64>,

    /// Check every day of the cycle
    #[arg(long)]
    pub daily: bool,
}

#[derive(Debug, Args)]
pub struct PlannerArgs {
    /// Week 1-4; all weeks when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub week: Option<u8>,
}

#[derive(Debug, Args)]
pub struct TimelineArgs {
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=30))]
    pub day: u8,
}
