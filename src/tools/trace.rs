//! Call tracing for tools
//!
//! `traced` wraps a tool so every invocation is announced before it runs.
//! The wrapped tool keeps its definition, arguments and result untouched.

use colored::Colorize;
use std::sync::Arc;
use tracing::debug;

use crate::core::ToolCall;
use crate::tools::registry::{Tool, ToolHandler};

/// Receives the name of each tool as it is invoked
pub type TraceSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Line announcing a tool invocation
pub fn trace_line(tool_name: &str) -> String {
    format!("Bot requested {}()", tool_name)
}

/// Print the trace line to stdout in bright green
pub fn console_trace() -> TraceSink {
    Arc::new(|name: &str| println!("{}", trace_line(name).bright_green()))
}

/// Wrap `tool` so `sink` hears about each call before it executes
pub fn traced(tool: Tool, sink: TraceSink) -> Tool {
    let name = tool.name().to_string();
    tool.map_handler(move |inner| {
        let handler: ToolHandler = Arc::new(move |call: &ToolCall| {
            sink(name.as_str());
            debug!(tool = %name, "tool requested by model");
            inner(call)
        });
        handler
    })
}
