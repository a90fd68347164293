// ABOUTME: Tests for the JSON-RPC 2.0 foundation module
// ABOUTME: Validates request, response, error structures and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use garmin_mcp_server::jsonrpc::{
    error_codes, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION,
};
use serde_json::Value;

#[test]
fn test_request_creation() {
    let req = JsonRpcRequest::new("test_method", None);
    assert_eq!(req.jsonrpc, JSONRPC_VERSION);
    assert_eq!(req.method, "test_method");
    assert!(req.params.is_none());
    assert!(req.id.is_some());
    assert!(!req.is_notification());
}

#[test]
fn test_notification_creation() {
    let req = JsonRpcRequest::notification("notifications/initialized", None);
    assert_eq!(req.jsonrpc, JSONRPC_VERSION);
    assert!(req.id.is_none());
    assert!(req.is_notification());
}

#[test]
fn test_success_response() {
    let resp = JsonRpcResponse::success(Value::from(1), Value::from("ok"));
    assert!(resp.is_success());
    assert!(!resp.is_error());
    assert_eq!(resp.jsonrpc, JSONRPC_VERSION);
}

#[test]
fn test_error_response() {
    let resp = JsonRpcResponse::error(Value::from(1), error_codes::INVALID_REQUEST, "Invalid Request");
    assert!(resp.is_error());
    assert!(!resp.is_success());
    let error = resp.error.unwrap();
    assert_eq!(error.code, -32600);
    assert_eq!(error.message, "Invalid Request");
}

#[test]
fn test_request_serialization() {
    let req = JsonRpcRequest::new("test", Some(Value::from("param")));
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("\"jsonrpc\":\"2.0\""));
    assert!(json.contains("\"method\":\"test\""));
}

#[test]
fn test_response_omits_absent_fields() {
    let resp = JsonRpcResponse::success(Value::from(7), serde_json::json!({"a": 1}));
    let json = serde_json::to_string(&resp).unwrap();
    assert!(!json.contains("\"error\""));

    let resp = JsonRpcResponse::error(Value::Null, error_codes::PARSE_ERROR, "Parse error");
    let json = serde_json::to_string(&resp).unwrap();
    assert!(!json.contains("\"result\""));
    assert!(json.contains("\"id\":null"));
}

#[test]
fn test_request_roundtrip_with_string_id() {
    let raw = r#"{"jsonrpc":"2.0","method":"tools/list","id":"abc-1"}"#;
    let req: JsonRpcRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req.method, "tools/list");
    assert_eq!(req.id, Some(Value::from("abc-1")));
}

#[test]
fn test_error_code_constants() {
    assert_eq!(error_codes::PARSE_ERROR, -32700);
    assert_eq!(error_codes::METHOD_NOT_FOUND, -32601);
    assert_eq!(error_codes::INVALID_PARAMS, -32602);
    assert_eq!(error_codes::INTERNAL_ERROR, -32603);
}
