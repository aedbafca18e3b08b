//! Tool registry - manages and dispatches tool calls
//!
//! Tools are declarative: a definition the model reads when choosing what to
//! call, bound to a handler that runs it.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::core::{Result, StorefrontError, ToolCall, ToolDefinition};

/// Handler bound to a tool definition
pub type ToolHandler = Arc<dyn Fn(&ToolCall) -> Result<Value> + Send + Sync>;

/// A named, schema-described operation the agent may invoke
#[derive(Clone)]
pub struct Tool {
    definition: ToolDefinition,
    handler: ToolHandler,
}

impl Tool {
    /// Bind a handler to a definition
    pub fn new<F>(definition: ToolDefinition, handler: F) -> Self
    where
        F: Fn(&ToolCall) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            definition,
            handler: Arc::new(handler),
        }
    }

    /// Replace the handler, keeping the definition untouched
    pub fn map_handler<F>(self, wrap: F) -> Self
    where
        F: FnOnce(ToolHandler) -> ToolHandler,
    {
        Self {
            handler: wrap(self.handler),
            definition: self.definition,
        }
    }

    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Run the handler
    pub fn call(&self, call: &ToolCall) -> Result<Value> {
        (self.handler)(call)
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

/// Fetch a required string argument
pub fn required_string(call: &ToolCall, key: &str) -> Result<String> {
    call.get_string(key).ok_or_else(|| {
        StorefrontError::tool(format!(
            "{}: missing required string argument '{}'",
            call.name, key
        ))
    })
}

/// Registry of available tools, in registration order
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Tool) {
        debug!(tool = tool.name(), "registered tool");
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Get all tool definitions
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition().clone()).collect()
    }

    /// Execute a tool call
    pub fn execute(&self, call: &ToolCall) -> Result<Value> {
        let tool = self
            .get(&call.name)
            .ok_or_else(|| StorefrontError::tool(format!("Unknown tool: {}", call.name)))?;

        debug!(tool = %call.name, arguments = %call.arguments, "executing tool");
        tool.call(call)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
