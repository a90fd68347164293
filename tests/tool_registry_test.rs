// ABOUTME: Forwarding tests - every tool makes exactly one upstream call
// ABOUTME: Arguments must reach the client unchanged, via the recording stub
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::RecordingApi;
use garmin_mcp_server::tools::ToolRegistry;
use serde_json::{json, Value};

/// Run one tool against a fresh recording stub and return the recorded calls
async fn run_tool(name: &str, args: Value) -> (Vec<(String, Value)>, Value) {
    let api = RecordingApi::with_response(json!({"payload": name}));
    let registry = ToolRegistry::full();
    let tool = registry.get(name).unwrap_or_else(|| panic!("tool {name} not registered"));

    let result = tool.execute(&api, &args).await.unwrap();
    (api.calls(), result)
}

#[tokio::test]
async fn test_list_activities_forwards_pagination() {
    let (calls, result) = run_tool("list_activities", json!({"limit": 7, "start": 3})).await;

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "get_activities");
    assert_eq!(calls[0].1, json!({"start": 3, "limit": 7}));
    assert_eq!(result, json!({"payload": "list_activities"}));
}

#[tokio::test]
async fn test_list_activities_applies_defaults() {
    let (calls, _) = run_tool("list_activities", json!({})).await;
    assert_eq!(calls, vec![("get_activities".to_owned(), json!({"start": 0, "limit": 20}))]);
}

#[tokio::test]
async fn test_get_activity_forwards_id() {
    let (calls, _) = run_tool("get_activity", json!({"activity_id": "987654321"})).await;
    assert_eq!(
        calls,
        vec![("get_activity".to_owned(), json!({"activity_id": "987654321"}))]
    );
}

#[tokio::test]
async fn test_get_activity_accepts_numeric_id() {
    let (calls, _) = run_tool("get_activity_splits", json!({"activity_id": 42})).await;
    assert_eq!(
        calls,
        vec![("get_activity_splits".to_owned(), json!({"activity_id": "42"}))]
    );
}

#[tokio::test]
async fn test_get_activities_by_date_forwards_range_and_filter() {
    let args = json!({
        "start_date": "2024-05-01",
        "end_date": "2024-05-31",
        "activity_type": "running"
    });
    let (calls, _) = run_tool("get_activities_by_date", args).await;

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "get_activities_by_date");
    assert_eq!(
        calls[0].1,
        json!({
            "start_date": "2024-05-01",
            "end_date": "2024-05-31",
            "activity_type": "running"
        })
    );
}

#[tokio::test]
async fn test_single_date_tools_forward_date() {
    for (tool, upstream) in [
        ("get_steps", "get_steps"),
        ("get_daily_summary", "get_daily_summary"),
        ("get_heart_rate", "get_heart_rate"),
        ("get_sleep", "get_sleep"),
        ("get_stress", "get_stress"),
        ("get_hrv", "get_hrv"),
        ("get_training_status", "get_training_status"),
        ("get_training_readiness", "get_training_readiness"),
        ("get_max_metrics", "get_max_metrics"),
    ] {
        let (calls, _) = run_tool(tool, json!({"date": "2024-06-15"})).await;
        assert_eq!(
            calls,
            vec![(upstream.to_owned(), json!({"date": "2024-06-15"}))],
            "tool {tool} did not forward its date"
        );
    }
}

#[tokio::test]
async fn test_range_tools_forward_both_dates() {
    for (tool, upstream) in [
        ("get_body_battery", "get_body_battery"),
        ("get_body_composition", "get_body_composition"),
        ("get_weigh_ins", "get_weigh_ins"),
    ] {
        let args = json!({"start_date": "2024-01-01", "end_date": "2024-01-31"});
        let (calls, _) = run_tool(tool, args).await;
        assert_eq!(
            calls,
            vec![(
                upstream.to_owned(),
                json!({"start_date": "2024-01-01", "end_date": "2024-01-31"})
            )],
            "tool {tool} did not forward its range"
        );
    }
}

#[tokio::test]
async fn test_no_argument_tools_make_one_call() {
    for (tool, upstream) in [
        ("get_user_profile", "get_user_profile"),
        ("get_user_settings", "get_user_settings"),
        ("get_devices", "get_devices"),
        ("get_device_last_used", "get_device_last_used"),
        ("get_gear", "get_gear"),
        ("get_earned_badges", "get_earned_badges"),
    ] {
        let (calls, _) = run_tool(tool, json!({})).await;
        assert_eq!(calls.len(), 1, "tool {tool} made {} calls", calls.len());
        assert_eq!(calls[0].0, upstream);
    }
}

#[tokio::test]
async fn test_device_settings_and_workout_forward_ids() {
    let (calls, _) = run_tool("get_device_settings", json!({"device_id": "555"})).await;
    assert_eq!(
        calls,
        vec![("get_device_settings".to_owned(), json!({"device_id": "555"}))]
    );

    let (calls, _) = run_tool("get_workout", json!({"workout_id": "777"})).await;
    assert_eq!(
        calls,
        vec![("get_workout".to_owned(), json!({"workout_id": "777"}))]
    );

    let (calls, _) = run_tool("list_workouts", json!({"limit": 2})).await;
    assert_eq!(
        calls,
        vec![("get_workouts".to_owned(), json!({"start": 0, "limit": 2}))]
    );
}

#[test]
fn test_registry_rejects_duplicate_names() {
    let mut registry = ToolRegistry::full();
    let count = registry.len();

    // Re-registering the same surface must not change the registry
    garmin_mcp_server::tools::activities::register(&mut registry);
    assert_eq!(registry.len(), count);
}

#[test]
fn test_registry_is_fully_populated() {
    let registry = ToolRegistry::full();
    assert_eq!(registry.len(), 25);
    assert!(!registry.is_empty());
    assert!(registry.get("list_activities").is_some());
    assert!(registry.get("unknown").is_none());

    let schemas = registry.schemas();
    assert_eq!(schemas.len(), registry.len());
}
