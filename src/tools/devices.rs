// ABOUTME: Device listing and settings tools over device-service
// ABOUTME: Registered devices, per-device settings, and the last-synced device
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

/// Register the device tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(Arc::new(GetDevices));
    registry.register(Arc::new(GetDeviceSettings));
    registry.register(Arc::new(GetDeviceLastUsed));
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

struct GetDevices;

#[async_trait]
impl McpTool for GetDevices {
    fn name(&self) -> &'static str {
        tools::GET_DEVICES
    }

    fn schema(&self) -> ToolSchema {
        no_args_schema(self.name(), "List Garmin devices registered on the account")
    }

    async fn execute(&self, api: &dyn GarminApi, _args: &Value) -> AppResult<Value> {
        api.get_devices().await
    }
}

struct GetDeviceSettings;

#[async_trait]
impl McpTool for GetDeviceSettings {
    fn name(&self) -> &'static str {
        tools::GET_DEVICE_SETTINGS
    }

    fn schema(&self) -> ToolSchema {
        let mut properties = HashMap::new();
        properties.insert(
            "device_id".to_owned(),
            PropertySchema::string("ID of the device whose settings to fetch"),
        );

        ToolSchema {
            name: self.name().to_owned(),
            description: "Get the settings of one registered device".into(),
            input_schema: JsonSchema {
                schema_type: "object".into(),
                properties: Some(properties),
                required: Some(vec!["device_id".to_owned()]),
            },
        }
    }

    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value> {
        let device_id = params::required_id(args, "device_id")?;
        api.get_device_settings(&device_id).await
    }
}

struct GetDeviceLastUsed;

#[async_trait]
impl McpTool for GetDeviceLastUsed {
    fn name(&self) -> &'static str {
        tools::GET_DEVICE_LAST_USED
    }

    fn schema(&self) -> ToolSchema {
        no_args_schema(self.name(), "Get the most recently used/synced device")
    }

    async fn execute(&self, api: &dyn GarminApi, _args: &Value) -> AppResult<Value> {
        api.get_device_last_used().await
    }
}
