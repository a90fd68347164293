// ABOUTME: The McpTool trait and the central name-to-handler registry
// ABOUTME: Built once at startup, then used immutably by the request loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Tool Registry
//!
//! Central registry for MCP tools: registration, lookup, and schema listing
//! for `tools/list` responses. The registry is built once at startup and
//! used immutably afterwards; tools are `Arc`-wrapped for shared access.

use crate::errors::AppResult;
use crate::garmin::GarminApi;
use crate::mcp::schema::ToolSchema;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// The trait every MCP tool implements
///
/// A tool validates its arguments, performs exactly one call against the
/// [`GarminApi`] handle, and returns the upstream payload unchanged.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as exposed over the protocol
    fn name(&self) -> &'static str;

    /// Input schema for `tools/list`
    fn schema(&self) -> ToolSchema;

    /// Execute the tool against the client handle
    ///
    /// Argument validation happens here, before any upstream call.
    async fn execute(&self, api: &dyn GarminApi, args: &Value) -> AppResult<Value>;
}

/// Central registry for MCP tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with every built-in tool registered
    #[must_use]
    pub fn full() -> Self {
        let mut registry = Self::new();
        super::profile::register(&mut registry);
        super::activities::register(&mut registry);
        super::wellness::register(&mut registry);
        super::training::register(&mut registry);
        super::body::register(&mut registry);
        super::devices::register(&mut registry);
        super::workouts::register(&mut registry);
        super::gear::register(&mut registry);
        super::challenges::register(&mut registry);
        registry
    }

    /// Register a tool
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same
    /// name already exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!("Registering tool '{}'", name);
        self.tools.insert(name, tool);
        true
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Schemas of all registered tools, sorted by name for stable listings
    #[must_use]
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|tool| tool.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
