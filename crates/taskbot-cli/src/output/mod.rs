use serde::Serialize;
use taskbot_core::COMPACT_DESCRIPTION_LIMIT;
use taskbot_core::entities::Robot;
use taskbot_core::responses::{
    ConflictResponse, CreateResponse, DeleteResponse, UpdateResponse, WeekResponse,
};
use taskbot_core::schedule::{ScheduleSummary, TimelineBlock};

use crate::cli::OutputFormat;

pub mod table;

/// Something that can be shown as a table as well as JSON.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;

    /// Longest cell before truncation; `None` keeps cells whole.
    fn max_cell(&self) -> Option<usize> {
        None
    }
}

/// Render a response in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table::render(
            &value.headers(),
            &value.rows(),
            value.max_cell(),
        )),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn flag(value: bool) -> String {
    String::from(if value { "yes" } else { "no" })
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn robot_row(robot: &Robot) -> Vec<String> {
    vec![
        robot.id.to_string(),
        robot.day.to_string(),
        robot.start_time.to_string(),
        robot.end_time.to_string(),
        robot.name.clone(),
        robot.color.clone(),
        flag(robot.manual),
        text(robot.description.as_deref()),
    ]
}

const ROBOT_HEADERS: [&str; 8] = ["id", "day", "start", "end", "name", "color", "manual", "description"];

impl Tabular for UpdateResponse {
    fn headers(&self) -> Vec<&'static str> {
        let mut headers = ROBOT_HEADERS.to_vec();
        headers.push("conflict");
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut row = robot_row(&self.updated);
        row.push(flag(self.conflict));
        vec![row]
    }
}

impl Tabular for Vec<Robot> {
    fn headers(&self) -> Vec<&'static str> {
        ROBOT_HEADERS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter().map(robot_row).collect()
    }
}

impl Tabular for CreateResponse {
    fn headers(&self) -> Vec<&'static str> {
        let mut headers = ROBOT_HEADERS.to_vec();
        headers.push("conflict");
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.created
            .iter()
            .map(|robot| {
                let mut row = robot_row(robot);
                row.push(flag(self.conflict));
                row
            })
            .collect()
    }
}

impl Tabular for DeleteResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["deleted"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.deleted.iter().map(|id| vec![id.to_string()]).collect()
    }
}

impl Tabular for ConflictResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["conflict", "with"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let with = self
            .with
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        vec![vec![flag(self.conflict), if with.is_empty() { "-".into() } else { with }]]
    }
}

impl Tabular for Vec<WeekResponse> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["week", "name", "start", "end", "manual", "days", "ids"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .flat_map(|week| {
                week.groups.iter().map(move |group| {
                    vec![
                        week.week.to_string(),
                        group.name.clone(),
                        group.start_time.to_string(),
                        group.end_time.to_string(),
                        flag(group.manual),
                        join(&group.days),
                        join(&group.ids),
                    ]
                })
            })
            .collect()
    }
}

impl Tabular for Vec<TimelineBlock> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["hour", "offset", "height", "start", "end", "name", "manual", "description"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|block| {
                vec![
                    block.hour.to_string(),
                    block.offset.to_string(),
                    block.height.to_string(),
                    block.start_time.to_string(),
                    block.end_time.to_string(),
                    block.name.clone(),
                    flag(block.manual),
                    text(block.description.as_deref()),
                ]
            })
            .collect()
    }

    fn max_cell(&self) -> Option<usize> {
        Some(COMPACT_DESCRIPTION_LIMIT)
    }
}

impl Tabular for ScheduleSummary {
    fn headers(&self) -> Vec<&'static str> {
        vec!["name", "monthly"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![
            vec!["(total robots)".to_string(), self.total.to_string()],
            vec!["(active robots)".to_string(), self.active.to_string()],
        ];
        rows.extend(
            self.usage
                .iter()
                .map(|usage| vec![usage.name.clone(), usage.formatted.clone()]),
        );
        rows
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskbot_core::entities::Robot;
    use taskbot_core::schedule::NameUsage;

    use super::*;

    fn robot() -> Robot {
        Robot {
            id: 3,
            name: "Sync".into(),
            start_time: "09:00".parse().unwrap(),
            end_time: "10:00".parse().unwrap(),
            color: "#fff".into(),
            manual: true,
            day: 4,
            is_daily: false,
            description: None,
        }
    }

    #[test]
    fn json_render_is_pretty() {
        let out = render(&vec![robot()], OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["startTime"], "09:00");
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&vec![robot()], OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with('['));
    }

    #[test]
    fn update_table_row_ends_with_conflict_flag() {
        let response = UpdateResponse {
            updated: robot(),
            conflict: false,
        };
        let out = render(&response, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].ends_with("conflict"));
        assert!(lines[2].contains("Sync"));
        assert!(lines[2].contains("yes"));
        assert!(lines[2].ends_with("no"));
    }

    #[test]
    fn summary_table_lists_counts_then_usage() {
        let summary = ScheduleSummary {
            total: 2,
            active: 1,
            usage: vec![NameUsage {
                name: "Sync".into(),
                minutes: 90,
                formatted: "1h 30m".into(),
            }],
        };
        let rows = summary.rows();
        assert_eq!(rows[0], vec!["(total robots)".to_string(), "2".to_string()]);
        assert_eq!(rows[2], vec!["Sync".to_string(), "1h 30m".to_string()]);
    }

    #[test]
    fn timeline_descriptions_are_truncated() {
        let block = TimelineBlock {
            id: 1,
            name: "Sync".into(),
            start_time: "09:00".parse().unwrap(),
            end_time: "09:10".parse().unwrap(),
            color: "#fff".into(),
            manual: false,
            description: Some("x".repeat(200)),
            hour: 9,
            offset: 0,
            height: 30,
        };
        let out = render(&vec![block], OutputFormat::Table).expect("table render should work");
        let last = out.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert_eq!(last.split_whitespace().last().unwrap().chars().count(), COMPACT_DESCRIPTION_LIMIT);
    }
}
