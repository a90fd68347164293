// ABOUTME: Gear tools over gear-service
// ABOUTME: The client resolves the numeric profile id the endpoint needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::tools;
use crate::errors::AppResult;
use crate::garmin::GarminApi;
use crate::mcp::schema::{JsonSchema, ToolSchema};
use crate::tools::registry::{McpTool, ToolRegistry};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Register the gear tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetGear));
}

struct GetGear;

#[async_trait]
impl McpTool for GetGear {
    fn name(&self) -> &'static str {
        tools::GET_GEAR
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_owned(),
            description: "List registered gear (shoes, bikes, ...) on the account".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(HashMap::new()),
                required: Some(vec![]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, _args: &Value) -> AppResult<Value> {
        api.get_gear().await
    }
}
