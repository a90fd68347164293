// ABOUTME: Tool registry and the forwarding tool handlers
// ABOUTME: One module per tool category, mirroring the account data areas
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # MCP tools
//!
//! Every tool is a thin forwarding handler: validate the scalar arguments,
//! call exactly one [`crate::garmin::GarminApi`] method, return the payload
//! unchanged. The registry maps tool names to handlers for `tools/list` and
//! `tools/call`.

/// Activity listing and detail tools
pub mod activities;

/// Body composition and weigh-in tools
pub mod body;

/// Badge tools
pub mod challenges;

/// Device listing and settings tools
pub mod devices;

/// Gear tools
pub mod gear;

/// Argument extraction and validation helpers
pub mod params;

/// User profile and settings tools
pub mod profile;

/// The `McpTool` trait and the name-to-handler registry
pub mod registry;

/// Training status and max metrics tools
pub mod training;

/// Daily wellness tools (steps, heart rate, sleep, stress, HRV)
pub mod wellness;

/// Saved workout tools
pub mod workouts;

pub use registry::{McpTool, ToolRegistry};
