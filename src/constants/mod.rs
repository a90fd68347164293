// ABOUTME: Application constants shared across modules
// ABOUTME: Protocol identifiers, tool names, environment variable names, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Centralized constants so tool names, env var names, and limits are written
//! once and referenced everywhere.

/// MCP protocol constants
pub mod protocol {
    /// MCP protocol revision this server implements
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

    /// Server name reported in the initialize response
    pub const SERVER_NAME: &str = "garmin-mcp-server";

    /// Server version reported in the initialize response
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Tool names exposed over `tools/list` and accepted by `tools/call`
pub mod tools {
    /// Social profile for the signed-in account
    pub const GET_USER_PROFILE: &str = "get_user_profile";
    /// Account-level user settings (units, sleep windows, ...)
    pub const GET_USER_SETTINGS: &str = "get_user_settings";

    /// Recent activities, newest first
    pub const LIST_ACTIVITIES: &str = "list_activities";
    /// Full detail for one activity
    pub const GET_ACTIVITY: &str = "get_activity";
    /// Lap/split breakdown for one activity
    pub const GET_ACTIVITY_SPLITS: &str = "get_activity_splits";
    /// Activities within a calendar date range
    pub const GET_ACTIVITIES_BY_DATE: &str = "get_activities_by_date";

    /// Step series for a day
    pub const GET_STEPS: &str = "get_steps";
    /// Daily wellness summary
    pub const GET_DAILY_SUMMARY: &str = "get_daily_summary";
    /// Heart rate series for a day
    pub const GET_HEART_RATE: &str = "get_heart_rate";
    /// Sleep detail for a night
    pub const GET_SLEEP: &str = "get_sleep";
    /// Stress series for a day
    pub const GET_STRESS: &str = "get_stress";
    /// Body Battery reports for a date range
    pub const GET_BODY_BATTERY: &str = "get_body_battery";
    /// Heart-rate variability summary for a day
    pub const GET_HRV: &str = "get_hrv";

    /// Aggregated training status
    pub const GET_TRAINING_STATUS: &str = "get_training_status";
    /// Daily training readiness score
    pub const GET_TRAINING_READINESS: &str = "get_training_readiness";
    /// VO2-max and related max metrics
    pub const GET_MAX_METRICS: &str = "get_max_metrics";

    /// Body composition over a date range
    pub const GET_BODY_COMPOSITION: &str = "get_body_composition";
    /// Weigh-in entries over a date range
    pub const GET_WEIGH_INS: &str = "get_weigh_ins";

    /// Registered devices on the account
    pub const GET_DEVICES: &str = "get_devices";
    /// Settings for one device
    pub const GET_DEVICE_SETTINGS: &str = "get_device_settings";
    /// Most recently used/synced device
    pub const GET_DEVICE_LAST_USED: &str = "get_device_last_used";

    /// Saved workouts, newest first
    pub const LIST_WORKOUTS: &str = "list_workouts";
    /// Full detail for one saved workout
    pub const GET_WORKOUT: &str = "get_workout";

    /// Registered gear (shoes, bikes, ...)
    pub const GET_GEAR: &str = "get_gear";

    /// Badges earned on the account
    pub const GET_EARNED_BADGES: &str = "get_earned_badges";
}

/// Environment variable names
///
/// The credential and token variables keep the names the long-standing
/// Garmin Connect tooling ecosystem uses, so existing setups carry over.
pub mod env {
    /// Garmin account email
    pub const GARMIN_EMAIL: &str = "GARMIN_EMAIL";
    /// Garmin account password
    pub const GARMIN_PASSWORD: &str = "GARMIN_PASSWORD";
    /// Directory holding persisted OAuth tokens
    pub const GARMIN_TOKENS: &str = "GARMINTOKENS";
    /// Optional path of a base64 token blob
    pub const GARMIN_TOKENS_BASE64: &str = "GARMINTOKENS_BASE64";
    /// Log level filter (tracing `EnvFilter` syntax)
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format: json, pretty, or compact
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Validation limits and defaults for tool arguments
pub mod limits {
    /// Default number of activities returned by `list_activities`
    pub const DEFAULT_ACTIVITY_LIMIT: usize = 20;
    /// Maximum activities per request (single upstream call)
    pub const MAX_ACTIVITY_LIMIT: usize = 200;
    /// Default number of workouts returned by `list_workouts`
    pub const DEFAULT_WORKOUT_LIMIT: usize = 20;
    /// Maximum workouts per request
    pub const MAX_WORKOUT_LIMIT: usize = 200;
    /// Refresh the access token this many minutes before expiry
    pub const TOKEN_REFRESH_THRESHOLD_MINUTES: i64 = 5;
}

/// Garmin Connect API endpoints and defaults
pub mod garmin_api {
    /// Base URL for authenticated Garmin Connect API calls
    pub const API_BASE_URL: &str = "https://connectapi.garmin.com";
    /// OAuth token endpoint used for refresh and first-time exchange
    pub const TOKEN_URL: &str = "https://connectapi.garmin.com/oauth-service/oauth/access_token";
    /// Default token directory when `GARMINTOKENS` is unset
    pub const DEFAULT_TOKEN_DIR: &str = "~/.garminconnect";
    /// File name of the persisted OAuth2 token inside the token directory
    pub const TOKEN_FILE: &str = "oauth2_token.json";
    /// Buffer passed to the sleep endpoint, matching the consumer web app
    pub const SLEEP_BUFFER_MINUTES: u32 = 60;
}
