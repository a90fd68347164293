// ABOUTME: MCP protocol schema definitions and message structures
// ABOUTME: Type-safe JSON-RPC payload shapes for Model Context Protocol messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP protocol messages, capabilities, and tool
//! schemas. Wire field names are camelCase per the protocol; the serde
//! renames keep the Rust side idiomatic.

use crate::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name as invoked by `tools/call`
    pub name: String,
    /// Human-readable description for the model
    pub description: String,
    /// JSON Schema of the tool arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always "object" for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named argument schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Names of required arguments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type ("string", "number", ...)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySchema {
    /// String property with a description
    #[must_use]
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            property_type: "string".into(),
            description: Some(description.into()),
        }
    }

    /// Number property with a description
    #[must_use]
    pub fn number(description: impl Into<String>) -> Self {
        Self {
            property_type: "number".into(),
            description: Some(description.into()),
        }
    }
}

/// Content types for MCP messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text {
        /// The text body
        text: String,
    },
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Content blocks returned to the client
    pub content: Vec<Content>,
    /// Whether this response represents a failed execution
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// The raw upstream payload, when execution succeeded
    #[serde(rename = "structuredContent", skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
}

impl ToolResponse {
    /// Successful execution carrying the upstream payload verbatim
    #[must_use]
    pub fn success(payload: Value) -> Self {
        let text = serde_json::to_string_pretty(&payload)
            .unwrap_or_else(|_| "null".to_owned());
        Self {
            content: vec![Content::Text { text }],
            is_error: false,
            structured_content: Some(payload),
        }
    }

    /// Failed execution with a message for the model
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text {
                text: message.into(),
            }],
            is_error: true,
            structured_content: None,
        }
    }
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
    /// Prompts capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<PromptsCapability>,
    /// Resources capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourcesCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the tool list can change during a session
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Prompts capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsCapability {
    /// Whether the prompt list can change during a session
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Resources capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesCapability {
    /// Whether resource subscriptions are supported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<bool>,
    /// Whether the resource list can change during a session
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol revision the server speaks
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Advertised capabilities
    pub capabilities: ServerCapabilities,
    /// Usage hints for the connecting model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Initialize response with this server's fixed configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION.to_owned(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_owned(),
                version: SERVER_VERSION.to_owned(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                prompts: None,
                resources: None,
            },
            instructions: Some(
                "This server exposes a personal Garmin Connect account. Use \
                 `list_activities`, `get_daily_summary`, `get_sleep`, and the other \
                 tools to read activities, health metrics, and device data. Dates \
                 are YYYY-MM-DD strings."
                    .into(),
            ),
        }
    }
}

impl Default for InitializeResponse {
    fn default() -> Self {
        Self::new()
    }
}
