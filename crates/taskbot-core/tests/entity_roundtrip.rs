//! Serde roundtrip and JsonSchema validation tests for the wire types.

use schemars::schema_for;
use taskbot_core::entities::{NewRobot, Robot};
use taskbot_core::responses::*;
use taskbot_core::schedule::{NameUsage, RobotGroup, ScheduleSummary, TimelineBlock};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_robot() -> Robot {
    Robot {
        id: 42,
        name: "Invoice sync".into(),
        start_time: "09:00".parse().unwrap(),
        end_time: "10:30".parse().unwrap(),
        color: "#3B82F6".into(),
        manual: true,
        day: 14,
        is_daily: false,
        description: Some("Pulls invoices from the ERP".into()),
    }
}

roundtrip_and_validate!(robot_roundtrip, Robot, sample_robot());

roundtrip_and_validate!(
    new_robot_roundtrip,
    NewRobot,
    NewRobot {
        name: "Backup".into(),
        start_time: "01:00".parse().unwrap(),
        end_time: "01:45".parse().unwrap(),
        color: "#10B981".into(),
        manual: false,
        day: 1,
        is_daily: true,
        description: None,
    }
);

roundtrip_and_validate!(
    group_roundtrip,
    RobotGroup,
    RobotGroup {
        name: "Invoice sync".into(),
        start_time: "09:00".parse().unwrap(),
        end_time: "10:30".parse().unwrap(),
        color: "#3B82F6".into(),
        manual: true,
        description: None,
        is_daily: false,
        days: vec![1, 8, 15],
        ids: vec![3, 9, 12],
    }
);

roundtrip_and_validate!(
    timeline_block_roundtrip,
    TimelineBlock,
    TimelineBlock {
        id: 1,
        name: "Backup".into(),
        start_time: "01:15".parse().unwrap(),
        end_time: "01:30".parse().unwrap(),
        color: "#10B981".into(),
        manual: false,
        description: None,
        hour: 1,
        offset: 15,
        height: 30,
    }
);

roundtrip_and_validate!(
    summary_roundtrip,
    ScheduleSummary,
    ScheduleSummary {
        total: 2,
        active: 1,
        usage: vec![NameUsage {
            name: "Backup".into(),
            minutes: 90,
            formatted: "1h 30m".into(),
        }],
    }
);

roundtrip_and_validate!(
    conflict_response_roundtrip,
    ConflictResponse,
    ConflictResponse {
        conflict: true,
        with: vec![4, 7],
    }
);

roundtrip_and_validate!(
    create_response_roundtrip,
    CreateResponse,
    CreateResponse {
        created: vec![sample_robot()],
        conflict: false,
    }
);

roundtrip_and_validate!(
    update_response_roundtrip,
    UpdateResponse,
    UpdateResponse {
        updated: sample_robot(),
        conflict: true,
    }
);

roundtrip_and_validate!(
    error_body_roundtrip,
    ErrorBody,
    ErrorBody::new("name is required")
);

#[test]
fn robot_wire_names_are_camel_case() {
    let json = serde_json::to_value(sample_robot()).unwrap();
    assert_eq!(json["startTime"], "09:00");
    assert_eq!(json["endTime"], "10:30");
    assert_eq!(json["isDaily"], false);
    assert!(json.get("start_time").is_none());
}

#[test]
fn robot_accepts_missing_optional_fields() {
    let robot: Robot = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Sync",
        "startTime": "08:00",
        "endTime": "09:00",
        "color": "#fff",
        "manual": false,
        "day": 3
    }))
    .unwrap();
    assert!(!robot.is_daily);
    assert_eq!(robot.description, None);
}
