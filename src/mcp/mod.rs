// ABOUTME: Model Context Protocol server module
// ABOUTME: Schema types, protocol handlers, and the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP server implementation

/// Core protocol message handlers (initialize, ping, listings)
pub mod protocol;

/// MCP protocol schema definitions
pub mod schema;

/// Request dispatch and the stdio transport
pub mod server;
