// ABOUTME: Shared test utilities - a recording GarminApi stub for tool tests
// ABOUTME: Records every upstream call so tests can assert forwarding behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::NaiveDate;
use garmin_mcp_server::errors::AppResult;
use garmin_mcp_server::garmin::GarminApi;
use serde_json::{json, Value};
use std::sync::Mutex;

/// A stub upstream client that records every call it receives.
///
/// Each trait method pushes `(method_name, arguments)` and returns the canned
/// response, so tests can assert that a tool made exactly one upstream call
/// with its arguments passed through unchanged.
pub struct RecordingApi {
    calls: Mutex<Vec<(String, Value)>>,
    response: Value,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::with_response(json!({"ok": true}))
    }

    pub fn with_response(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, method: &str, args: Value) -> AppResult<Value> {
        self.calls.lock().unwrap().push((method.to_owned(), args));
        Ok(self.response.clone())
    }
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GarminApi for RecordingApi {
    async fn get_user_profile(&self) -> AppResult<Value> {
        self.record("get_user_profile", json!({}))
    }

    async fn get_user_settings(&self) -> AppResult<Value> {
        self.record("get_user_settings", json!({}))
    }

    async fn get_activities(&self, start: usize, limit: usize) -> AppResult<Value> {
        self.record("get_activities", json!({"start": start, "limit": limit}))
    }

    async fn get_activity(&self, activity_id: &str) -> AppResult<Value> {
        self.record("get_activity", json!({"activity_id": activity_id}))
    }

    async fn get_activity_splits(&self, activity_id: &str) -> AppResult<Value> {
        self.record("get_activity_splits", json!({"activity_id": activity_id}))
    }

    async fn get_activities_by_date(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        activity_type: Option<&str>,
    ) -> AppResult<Value> {
        self.record(
            "get_activities_by_date",
            json!({
                "start_date": start_date.to_string(),
                "end_date": end_date.to_string(),
                "activity_type": activity_type,
            }),
        )
    }

    async fn get_steps(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_steps", json!({"date": date.to_string()}))
    }

    async fn get_daily_summary(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_daily_summary", json!({"date": date.to_string()}))
    }

    async fn get_heart_rate(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_heart_rate", json!({"date": date.to_string()}))
    }

    async fn get_sleep(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_sleep", json!({"date": date.to_string()}))
    }

    async fn get_stress(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_stress", json!({"date": date.to_string()}))
    }

    async fn get_body_battery(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Value> {
        self.record(
            "get_body_battery",
            json!({"start_date": start_date.to_string(), "end_date": end_date.to_string()}),
        )
    }

    async fn get_hrv(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_hrv", json!({"date": date.to_string()}))
    }

    async fn get_training_status(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_training_status", json!({"date": date.to_string()}))
    }

    async fn get_training_readiness(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_training_readiness", json!({"date": date.to_string()}))
    }

    async fn get_max_metrics(&self, date: NaiveDate) -> AppResult<Value> {
        self.record("get_max_metrics", json!({"date": date.to_string()}))
    }

    async fn get_body_composition(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Value> {
        self.record(
            "get_body_composition",
            json!({"start_date": start_date.to_string(), "end_date": end_date.to_string()}),
        )
    }

    async fn get_weigh_ins(&self, start_date: NaiveDate, end_date: NaiveDate) -> AppResult<Value> {
        self.record(
            "get_weigh_ins",
            json!({"start_date": start_date.to_string(), "end_date": end_date.to_string()}),
        )
    }

    async fn get_devices(&self) -> AppResult<Value> {
        self.record("get_devices", json!({}))
    }

    async fn get_device_settings(&self, device_id: &str) -> AppResult<Value> {
        self.record("get_device_settings", json!({"device_id": device_id}))
    }

    async fn get_device_last_used(&self) -> AppResult<Value> {
        self.record("get_device_last_used", json!({}))
    }

    async fn get_workouts(&self, start: usize, limit: usize) -> AppResult<Value> {
        self.record("get_workouts", json!({"start": start, "limit": limit}))
    }

    async fn get_workout(&self, workout_id: &str) -> AppResult<Value> {
        self.record("get_workout", json!({"workout_id": workout_id}))
    }

    async fn get_gear(&self) -> AppResult<Value> {
        self.record("get_gear", json!({}))
    }

    async fn get_earned_badges(&self) -> AppResult<Value> {
        self.record("get_earned_badges", json!({}))
    }
}
