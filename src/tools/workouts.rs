// ABOUTME: Saved workout tools over workout-service
// ABOUTME: Listing with pagination plus single-workout detail
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

/// Register the workout tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(ListWorkouts));
    registry.register(Arc::new(GetWorkout));
}

struct ListWorkouts;

#[async_trait]
impl McpTool for ListWorkouts {
    fn name(&self) -> &'static str {
        tools::LIST_WORKOUTS
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "limit".to_owned(),
            PropertySchema::number(format!(
                "Maximum number of workouts to return (1-{}, default {})",
                limits::MAX_WORKOUT_LIMIT,
                limits::DEFAULT_WORKOUT_LIMIT
            )),
        );
        properties.insert(
            "start".to_owned(),
            PropertySchema::number("Number of workouts to skip (for pagination)"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "List saved workouts, newest first".into(),
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
            limits::DEFAULT_WORKOUT_LIMIT,
            limits::MAX_WORKOUT_LIMIT,
        )?;
        let start = params::offset(args, "start")?;
        api.get_workouts(start, limit).await
    }
}

struct GetWorkout;

#[async_trait]
impl McpTool for GetWorkout {
    fn name(&self) -> &'static str {
        tools::GET_WORKOUT
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "workout_id".to_owned(),
            PropertySchema::string("ID of the saved workout to fetch"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "Get full detail for one saved workout".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(properties),
                required: Some(vec!["workout_id".to_owned()]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let workout_id = params::required_id(args, "workout_id")?;
        api.get_workout(&workout_id).await
    }
}
