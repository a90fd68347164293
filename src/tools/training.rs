// ABOUTME: Training status, readiness, and max metrics tools
// ABOUTME: Forwarding calls into metrics-service endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::tools;
use crate::errors::AppResult;
use crate::garmin::GarminApi;
use crate::mcp::schema::{JsonSchema, PropertySchema, ToolSchema};
use crate::tools::params;
use crate::tools::registry::{McpTool, ToolRegistry};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Register the training tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetTrainingStatus));
    registry.register(Arc::new(GetTrainingReadiness));
    registry.register(Arc::new(GetMaxMetrics));
}

fn single_date_schema(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "date".to_owned(),
        PropertySchema::string("Calendar date, YYYY-MM-DD"),
    );

    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec!["date".to_owned()]),
        },
    }
}

struct GetTrainingStatus;

#[async_trait]
impl McpTool for GetTrainingStatus {
    fn name(&self) -> &'static str {
        tools::GET_TRAINING_STATUS
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(
            self.name(),
            "Get aggregated training status (load, status phrase) for a date",
        )
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_training_status(date).await
    }
}

struct GetTrainingReadiness;

#[async_trait]
impl McpTool for GetTrainingReadiness {
    fn name(&self) -> &'static str {
        tools::GET_TRAINING_READINESS
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(self.name(), "Get the training readiness score for a date")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_training_readiness(date).await
    }
}

struct GetMaxMetrics;

#[async_trait]
impl McpTool for GetMaxMetrics {
    fn name(&self) -> &'static str {
        tools::GET_MAX_METRICS
    }

    fn schema(&self) -> ToolSchema {
        single_date_schema(
            self.name(),
            "Get VO2-max and related max metrics for a date",
        )
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let date = params::required_date(args, "date")?;
        api.get_max_metrics(date).await
    }
}
