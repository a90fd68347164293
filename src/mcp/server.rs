// ABOUTME: MCP request dispatch and the stdio transport loop
// ABOUTME: stdin carries JSON-RPC requests, stdout carries responses, logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # MCP server
//!
//! `McpServer` routes each JSON-RPC request to a protocol handler or, for
//! `tools/call`, through the tool registry to exactly one upstream client
//! call. The stdio transport reads newline-delimited requests from stdin and
//! writes one response line per request to stdout. Notifications produce no
//! response.

use crate::errors::AppResult;
use crate::garmin::GarminApi;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::schema::ToolResponse;
use crate::tools::registry::ToolRegistry;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Shared resources the request loop needs
pub struct ServerResources {
    /// The authenticated Garmin client handle
    pub api: Arc<dyn GarminApi>,
    /// Registry of all exposed tools
    pub registry: ToolRegistry,
}

impl ServerResources {
    /// Bundle the client handle and tool registry
    #[must_use]
    pub fn new(api: Arc<dyn GarminApi>, registry: ToolRegistry) -> Self {
        Self { api, registry }
    }
}

/// MCP server over a tool registry and one client handle
pub struct McpServer {
    resources: Arc<ServerResources>,
}

impl McpServer {
    /// Create a new server over the shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Dispatch a single request.
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        match request.method.as_str() {
            "initialize" => Some(ProtocolHandler::handle_initialize(&request)),
            "ping" => Some(ProtocolHandler::handle_ping(&request)),
            "tools/list" => Some(ProtocolHandler::handle_tools_list(
                &request,
                &self.resources.registry,
            )),
            "tools/call" => Some(self.handle_tools_call(request).await),
            "prompts/list" => Some(ProtocolHandler::handle_prompts_list(&request)),
            "resources/list" => Some(ProtocolHandler::handle_resources_list(&request)),
            // Lifecycle notifications require no reply
            "notifications/initialized" | "notifications/cancelled" => None,
            _ if request.is_notification() => None,
            _ => Some(ProtocolHandler::handle_unknown_method(&request)),
        }
    }

    /// Handle a `tools/call` request: validate, forward, wrap.
    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request
            .id
            .clone()
            .unwrap_or_else(|| Value::Number(0.into()));
        let params = request.params.unwrap_or_else(|| serde_json::json!({}));

        let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                request_id,
                error_codes::INVALID_PARAMS,
                "Missing tool name",
            );
        };

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}));

        let Some(tool) = self.resources.registry.get(tool_name) else {
            return JsonRpcResponse::error(
                request_id,
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown tool: {tool_name}"),
            );
        };

        let started = Instant::now();
        match tool.execute(self.resources.api.as_ref(), &arguments).await {
            Ok(payload) => {
                info!(
                    mcp.tool = %tool_name,
                    mcp.success = true,
                    mcp.duration_ms = %started.elapsed().as_millis(),
                    "MCP tool call"
                );
                match serde_json::to_value(ToolResponse::success(payload)) {
                    Ok(result) => JsonRpcResponse::success(request_id, result),
                    Err(e) => JsonRpcResponse::error(
                        request_id,
                        error_codes::INTERNAL_ERROR,
                        format!("Failed to serialize tool response: {e}"),
                    ),
                }
            }
            // Bad arguments never reached the upstream service; reject the call itself
            Err(e) if e.code.is_validation() => {
                warn!(mcp.tool = %tool_name, "rejected arguments: {e}");
                JsonRpcResponse::error(request_id, e.jsonrpc_code(), e.to_string())
            }
            Err(e) => {
                warn!(
                    mcp.tool = %tool_name,
                    mcp.success = false,
                    mcp.duration_ms = %started.elapsed().as_millis(),
                    "MCP tool call failed: {e}"
                );
                match serde_json::to_value(ToolResponse::error(e.to_string())) {
                    Ok(result) => JsonRpcResponse::success(request_id, result),
                    Err(serialize_err) => JsonRpcResponse::error(
                        request_id,
                        error_codes::INTERNAL_ERROR,
                        format!("Failed to serialize tool error: {serialize_err}"),
                    ),
                }
            }
        }
    }

    /// JSON-RPC parse error response for undecodable input lines
    fn parse_error_response() -> Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "error": {
                "code": error_codes::PARSE_ERROR,
                "message": "Parse error"
            },
            "id": null
        })
    }

    /// Run the stdio transport until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails
    pub async fn run_stdio(&self) -> AppResult<()> {
        use tokio::io::{AsyncBufReadExt, BufReader};

        info!("MCP stdio transport ready - listening on stdin/stdout");

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| crate::errors::AppError::internal(format!("stdin read failed: {e}")))?
        {
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(request) => {
                    if let Some(response) = self.handle_request(request).await {
                        if let Ok(json) = serde_json::to_string(&response) {
                            println!("{json}");
                        }
                    }
                }
                Err(e) => {
                    warn!("Invalid JSON-RPC message: {}", e);
                    println!("{}", Self::parse_error_response());
                }
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}
