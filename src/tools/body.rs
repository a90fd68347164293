// ABOUTME: Body composition and weigh-in tools over weight-service
// ABOUTME: Both take a start_date/end_date pair
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

/// Register the body composition tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetBodyComposition));
    registry.register(Arc::new(GetWeighIns));
}

fn date_range_schema(name: &str, description: &str) -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "start_date".to_owned(),
        PropertySchema::string("Range start, YYYY-MM-DD"),
    );
    properties.insert(
        "end_date".to_owned(),
        PropertySchema::string("Range end, YYYY-MM-DD"),
    );

    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec!["start_date".to_owned(), "end_date".to_owned()]),
        },
    }
}

struct GetBodyComposition;

#[async_trait]
impl McpTool for GetBodyComposition {
    fn name(&self) -> &'static str {
        tools::GET_BODY_COMPOSITION
    }

    fn schema(&self) -> ToolSchema {
        date_range_schema(
            self.name(),
            "Get body composition (weight, body fat, BMI) over a date range",
        )
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let (start, end) = params::date_range(args)?;
        api.get_body_composition(start, end).await
    }
}

struct GetWeighIns;

#[async_trait]
impl McpTool for GetWeighIns {
    fn name(&self) -> &'static str {
        tools::GET_WEIGH_INS
    }

    fn schema(&self) -> ToolSchema {
        date_range_schema(self.name(), "Get weigh-in entries over a date range")
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let (start, end) = params::date_range(args)?;
        api.get_weigh_ins(start, end).await
    }
}
