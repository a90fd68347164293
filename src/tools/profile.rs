// ABOUTME: User profile and settings tools over userprofile-service
// ABOUTME: No arguments; both resolve against the signed-in account
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

/// Register the profile tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetUserProfile));
    registry.register(Arc::new(GetUserSettings));
}

fn no_args_schema(name: &str, description: &str) -> ToolSchema {
    ToolSchema {
        name: name.to_owned(),
        description: description.to_owned(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(HashMap::new()),
            required: Some(vec![]),
        },
    }
}

struct GetUserProfile;

#[async_trait]
impl McpTool for GetUserProfile {
    fn name(&self) -> &'static str {
        tools::GET_USER_PROFILE
    }

    fn schema(&self) -> ToolSchema {
        no_args_schema(self.name(), "Get the social profile of the signed-in account")
    }

    async fn execute(&self, api: &dyn GarminApi, _args: &Value) -> AppResult<Value> {
        api.get_user_profile().await
    }
}

struct GetUserSettings;

#[async_trait]
impl McpTool for GetUserSettings {
    fn name(&self) -> &'static str {
        tools::GET_USER_SETTINGS
    }

    fn schema(&self) -> ToolSchema {
        no_args_schema(
            self.name(),
            "Get account-level user settings (units, sleep windows, ...)",
        )
    }

    async fn execute(&self, api: &dyn GarminApi, _args: &Value) -> AppResult<Value> {
        api.get_user_settings().await
    }
}
