// ABOUTME: Badge tools over badge-service
// ABOUTME: Earned badges for the signed-in account
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

/// Register the badge tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetEarnedBadges));
}

struct GetEarnedBadges;

#[async_trait]
impl McpTool for GetEarnedBadges {
    fn name(&self) -> &'static str {
        tools::GET_EARNED_BADGES
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_owned(),
            description: "List badges earned on the account".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(HashMap::new()),
                required: Some(vec![]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, _args: &Value) -> AppResult<Value> {
        api.get_earned_badges().await
    }
}
