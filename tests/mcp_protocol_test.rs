// ABOUTME: MCP protocol compliance tests against the request dispatcher
// ABOUTME: Covers initialize, ping, listings, tools/call routing, and notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::RecordingApi;
use garmin_mcp_server::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_NAME};
use garmin_mcp_server::jsonrpc::{error_codes, JsonRpcRequest};
use garmin_mcp_server::mcp::server::{McpServer, ServerResources};
use garmin_mcp_server::tools::ToolRegistry;
use serde_json::{json, Value};
use std::sync::Arc;

fn test_server() -> McpServer {
    let resources = Arc::new(ServerResources::new(
        Arc::new(RecordingApi::new()),
        ToolRegistry::full(),
    ));
    McpServer::new(resources)
}

#[tokio::test]
async fn test_initialize_response_shape() {
    let server = test_server();
    let request = JsonRpcRequest::with_id("initialize", None, Value::from(1));

    let response = server.handle_request(request).await.unwrap();
    assert!(response.is_success());

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
    assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn test_ping_returns_empty_object() {
    let server = test_server();
    let request = JsonRpcRequest::with_id("ping", None, Value::from(2));

    let response = server.handle_request(request).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.result.unwrap(), json!({}));
    assert_eq!(response.id, Value::from(2));
}

#[tokio::test]
async fn test_tools_list_contains_all_tools() {
    let server = test_server();
    let request = JsonRpcRequest::with_id("tools/list", None, Value::from(3));

    let response = server.handle_request(request).await.unwrap();
    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();

    assert_eq!(tools.len(), ToolRegistry::full().len());

    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"list_activities"));
    assert!(names.contains(&"get_sleep"));
    assert!(names.contains(&"get_devices"));
    assert!(names.contains(&"get_max_metrics"));

    // Listing is sorted for stable output
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    // Every tool advertises an object input schema
    for tool in tools {
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(tool["description"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_prompts_and_resources_list_empty() {
    let server = test_server();

    let response = server
        .handle_request(JsonRpcRequest::with_id("prompts/list", None, Value::from(4)))
        .await
        .unwrap();
    assert_eq!(response.result.unwrap()["prompts"], json!([]));

    let response = server
        .handle_request(JsonRpcRequest::with_id("resources/list", None, Value::from(5)))
        .await
        .unwrap();
    assert_eq!(response.result.unwrap()["resources"], json!([]));
}

#[tokio::test]
async fn test_unknown_method_error() {
    let server = test_server();
    let request = JsonRpcRequest::with_id("bogus/method", None, Value::from(6));

    let response = server.handle_request(request).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
    assert!(error.message.contains("bogus/method"));
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let server = test_server();

    let initialized = JsonRpcRequest::notification("notifications/initialized", None);
    assert!(server.handle_request(initialized).await.is_none());

    let unknown = JsonRpcRequest::notification("notifications/whatever", None);
    assert!(server.handle_request(unknown).await.is_none());
}

#[tokio::test]
async fn test_tools_call_success_wraps_payload() {
    let api = Arc::new(RecordingApi::with_response(json!({"steps": 9001})));
    let resources = Arc::new(ServerResources::new(api, ToolRegistry::full()));
    let server = McpServer::new(resources);

    let request = JsonRpcRequest::with_id(
        "tools/call",
        Some(json!({"name": "get_steps", "arguments": {"date": "2024-06-01"}})),
        Value::from(7),
    );

    let response = server.handle_request(request).await.unwrap();
    assert!(response.is_success());

    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    assert_eq!(result["structuredContent"], json!({"steps": 9001}));
    assert_eq!(result["content"][0]["type"], "text");
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let server = test_server();
    let request = JsonRpcRequest::with_id(
        "tools/call",
        Some(json!({"name": "no_such_tool", "arguments": {}})),
        Value::from(8),
    );

    let response = server.handle_request(request).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
    assert!(error.message.contains("no_such_tool"));
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let server = test_server();
    let request = JsonRpcRequest::with_id("tools/call", Some(json!({})), Value::from(9));

    let response = server.handle_request(request).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tools_call_invalid_arguments_rejected_as_invalid_params() {
    let server = test_server();
    let request = JsonRpcRequest::with_id(
        "tools/call",
        Some(json!({"name": "get_steps", "arguments": {"date": "June 1st"}})),
        Value::from(10),
    );

    let response = server.handle_request(request).await.unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("date"));
}
