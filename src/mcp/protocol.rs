// ABOUTME: MCP protocol message handlers for core protocol operations
// ABOUTME: Handles initialize, ping, tools/list, and the listing methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # MCP Protocol Handlers
//!
//! Core MCP protocol message handling for initialization, listings, and
//! unknown methods. `tools/call` routing lives in [`super::server`], where
//! the registry and client handle are available.

use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::schema::InitializeResponse;
use crate::tools::registry::ToolRegistry;
use serde_json::Value;

/// MCP protocol handlers
pub struct ProtocolHandler;

/// Default ID for error responses that don't have a request ID
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        match serde_json::to_value(InitializeResponse::new()) {
            Ok(result) => JsonRpcResponse::success(request_id, result),
            Err(_) => JsonRpcResponse::error(
                request_id,
                error_codes::INTERNAL_ERROR,
                "Internal error",
            ),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(request_id, serde_json::json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: &JsonRpcRequest, registry: &ToolRegistry) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(
            request_id,
            serde_json::json!({ "tools": registry.schemas() }),
        )
    }

    /// Handle prompts list request
    #[must_use]
    pub fn handle_prompts_list(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(request_id, serde_json::json!({ "prompts": [] }))
    }

    /// Handle resources list request
    #[must_use]
    pub fn handle_resources_list(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(request_id, serde_json::json!({ "resources": [] }))
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::error(
            request_id,
            error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
