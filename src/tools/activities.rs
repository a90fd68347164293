// ABOUTME: Activity listing and detail tools
// ABOUTME: Each handler forwards to one activity-service or activitylist-service call
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::{limits, tools};
use crate::errors::AppResult;
use crate::garmin::GarminApi;
use crate::mcp::schema::{JsonSchema, PropertySchema, ToolSchema};
use crate::tools::params;
use crate::tools::registry::{McpTool, ToolRegistry};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Register the activity tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(ListActivities));
    registry.register(Arc::new(GetActivity));
    registry.register(Arc::new(GetActivitySplits));
    registry.register(Arc::new(GetActivitiesByDate));
}

/// Recent activities, newest first
struct ListActivities;

#[async_trait]
impl McpTool for ListActivities {
    fn name(&self) -> &'static str {
        tools::LIST_ACTIVITIES
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "limit".to_owned(),
            PropertySchema::number(format!(
                "Maximum number of activities to return (1-{}, default {})",
                limits::MAX_ACTIVITY_LIMIT,
                limits::DEFAULT_ACTIVITY_LIMIT
            )),
        );
        properties.insert(
            "start".to_owned(),
            PropertySchema::number("Number of activities to skip (for pagination)"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "List recent Garmin activities, newest first".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(properties),
                required: Some(vec![]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let limit = params::limit(
            args,
            "limit",
            limits::DEFAULT_ACTIVITY_LIMIT,
            limits::MAX_ACTIVITY_LIMIT,
        )?;
        let start = params::offset(args, "start")?;
        api.get_activities(start, limit).await
    }
}

/// Full detail for one activity
struct GetActivity;

#[async_trait]
impl McpTool for GetActivity {
    fn name(&self) -> &'static str {
        tools::GET_ACTIVITY
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "activity_id".to_owned(),
            PropertySchema::string("ID of the activity to fetch"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "Get full detail for one activity".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(properties),
                required: Some(vec!["activity_id".to_owned()]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let activity_id = params::required_id(args, "activity_id")?;
        api.get_activity(&activity_id).await
    }
}

/// Lap/split breakdown for one activity
struct GetActivitySplits;

#[async_trait]
impl McpTool for GetActivitySplits {
    fn name(&self) -> &'static str {
        tools::GET_ACTIVITY_SPLITS
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "activity_id".to_owned(),
            PropertySchema::string("ID of the activity whose splits to fetch"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "Get the lap/split breakdown for one activity".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(properties),
                required: Some(vec!["activity_id".to_owned()]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let activity_id = params::required_id(args, "activity_id")?;
        api.get_activity_splits(&activity_id).await
    }
}

/// Activities within a calendar date range
struct GetActivitiesByDate;

#[async_trait]
impl McpTool for GetActivitiesByDate {
    fn name(&self) -> &'static str {
        tools::GET_ACTIVITIES_BY_DATE
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "start_date".to_owned(),
            PropertySchema::string("Range start, YYYY-MM-DD"),
        );
        properties.insert(
            "end_date".to_owned(),
            PropertySchema::string("Range end, YYYY-MM-DD"),
        );
        properties.insert(
            "activity_type".to_owned(),
            PropertySchema::string("Optional activity type filter (e.g. 'running', 'cycling')"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "List activities within a date range, optionally filtered by type".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(properties),
                required: Some(vec!["start_date".to_owned(), "end_date".to_owned()]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let (start, end) = params::date_range(args)?;
        let activity_type = params::optional_str(args, "activity_type")?;
        api.get_activities_by_date(start, end, activity_type.as_deref())
            .await
    }
}
