//! Model Context Protocol surface
//!
//! Wire types for tool listings, tool results and model tool calls, plus
//! the traits a transport-backed client implements to feed the bridge.

pub mod source;
pub mod types;

pub use source::{StaticToolSource, ToolInvoker, ToolSource};
pub use types::{ListToolsResult, McpContent, McpResourceRef, McpTool, McpToolResult, ToolCall};

#[cfg(test)]
pub use source::MockToolInvoker;
