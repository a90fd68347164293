// ABOUTME: The GarminApi trait - one method per Garmin Connect endpoint the tools forward to
// ABOUTME: Payloads stay opaque serde_json::Value pass-throughs end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Garmin Connect client trait
//!
//! One trait method per upstream endpoint, each returning the payload as
//! received from the service. The tool layer depends only on this trait, so
//! tests can substitute a recording stub for the HTTP client.
//!
//! Upstream responses are deliberately not modeled as typed structs: the
//! server forwards them verbatim, and their shape is owned by the upstream
//! service.

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

/// Core Garmin Connect data access trait
///
/// All implementations must be `Send + Sync` for shared access from the
/// request loop and tests.
#[async_trait]
pub trait GarminApi: Send + Sync {
    // ── Profile ─────────────────────────────────────────────────────────

    /// Social profile for the signed-in account
    async fn get_user_profile(&self) -> AppResult<Value>;

    /// Account-level user settings
    async fn get_user_settings(&self) -> AppResult<Value>;

    // ── Activities ──────────────────────────────────────────────────────

    /// Activity list, newest first, `start` offset and `limit` page size
    async fn get_activities(&self, start: usize, limit: usize) -> AppResult<Value>;

    /// Full detail for one activity
    async fn get_activity(&self, activity_id: &str) -> AppResult<Value>;

    /// Lap/split breakdown for one activity
    async fn get_activity_splits(&self, activity_id: &str) -> AppResult<Value>;

    /// Activities within a calendar date range, optionally filtered by type
    async fn get_activities_by_date(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        activity_type: Option<&str>,
    ) -> AppResult<Value>;

    // ── Wellness ────────────────────────────────────────────────────────

    /// Step series for a day
    async fn get_steps(&self, date: NaiveDate) -> AppResult<Value>;

    /// Daily wellness summary
    async fn get_daily_summary(&self, date: NaiveDate) -> AppResult<Value>;

    /// Heart rate series for a day
    async fn get_heart_rate(&self, date: NaiveDate) -> AppResult<Value>;

    /// Sleep detail for a night
    async fn get_sleep(&self, date: NaiveDate) -> AppResult<Value>;

    /// Stress series for a day
    async fn get_stress(&self, date: NaiveDate) -> AppResult<Value>;

    /// Body Battery reports for a date range
    async fn get_body_battery(&self, start_date: NaiveDate, end_date: NaiveDate)
        -> AppResult<Value>;

    /// Heart-rate variability summary for a day
    async fn get_hrv(&self, date: NaiveDate) -> AppResult<Value>;

    // ── Training ────────────────────────────────────────────────────────

    /// Aggregated training status
    async fn get_training_status(&self, date: NaiveDate) -> AppResult<Value>;

    /// Daily training readiness score
    async fn get_training_readiness(&self, date: NaiveDate) -> AppResult<Value>;

    /// VO2-max and related max metrics
    async fn get_max_metrics(&self, date: NaiveDate) -> AppResult<Value>;

    // ── Body ────────────────────────────────────────────────────────────

    /// Body composition over a date range
    async fn get_body_composition(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Value>;

    /// Weigh-in entries over a date range
    async fn get_weigh_ins(&self, start_date: NaiveDate, end_date: NaiveDate) -> AppResult<Value>;

    // ── Devices ─────────────────────────────────────────────────────────

    /// Registered devices on the account
    async fn get_devices(&self) -> AppResult<Value>;

    /// Settings for one device
    async fn get_device_settings(&self, device_id: &str) -> AppResult<Value>;

    /// Most recently used/synced device
    async fn get_device_last_used(&self) -> AppResult<Value>;

    // ── Workouts ────────────────────────────────────────────────────────

    /// Saved workouts, `start` offset and `limit` page size
    async fn get_workouts(&self, start: usize, limit: usize) -> AppResult<Value>;

    /// Full detail for one saved workout
    async fn get_workout(&self, workout_id: &str) -> AppResult<Value>;

    // ── Gear & badges ───────────────────────────────────────────────────

    /// Registered gear (shoes, bikes, ...)
    async fn get_gear(&self) -> AppResult<Value>;

    /// Badges earned on the account
    async fn get_earned_badges(&self) -> AppResult<Value>;
}
