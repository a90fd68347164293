// ABOUTME: Main library entry point for the Garmin Connect MCP server
// ABOUTME: Exposes a personal Garmin account's fitness data as MCP tools over stdio
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Garmin Connect MCP Server
//!
//! A Model Context Protocol (MCP) server that exposes a personal Garmin
//! Connect account to AI assistants. Every tool is a thin forwarding call:
//! the handler validates its scalar arguments, invokes one Garmin Connect
//! API endpoint through the shared client, and returns the payload as
//! received from the upstream service.
//!
//! ## Architecture
//!
//! - **`garmin`**: the authenticated Garmin Connect client with on-disk
//!   token persistence and refresh-on-expiry
//! - **`tools`**: the tool registry mapping MCP tool names to handlers
//! - **`mcp`**: JSON-RPC 2.0 protocol handling and the stdio transport
//! - **`config`**: environment-only configuration (`.env` + process env)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use garmin_mcp_server::config::environment::ServerConfig;
//! use garmin_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("token directory: {}", config.token_dir.display());
//!     Ok(())
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Garmin Connect API client, token store, and authentication lifecycle
pub mod garmin;

/// Unified JSON-RPC 2.0 foundation for the MCP protocol
pub mod jsonrpc;

/// Production logging and structured output
pub mod logging;

/// Model Context Protocol server implementation
pub mod mcp;

/// Tool registry and the forwarding tool handlers
pub mod tools;
