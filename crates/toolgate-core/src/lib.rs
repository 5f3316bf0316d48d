//! Toolgate Core Library
//!
//! A typed tool-invocation bridge for MCP tool servers:
//!
//! - [`schema`] translates a tool's `inputSchema` into a [`SchemaNode`]
//!   and validates arguments against it
//! - [`descriptor`] turns listed tools into [`ToolDescriptor`]s for a model
//! - [`catalog`] and [`gate`] make sure only known tools with valid
//!   arguments reach the endpoint

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod gate;
pub mod mcp;
pub mod schema;

pub use catalog::ToolCatalog;
pub use config::BridgeConfig;
pub use descriptor::{Advertiser, ToolConverter, ToolDescriptor, advertise};
pub use error::{BridgeError, BridgeResult};
pub use gate::InvocationGate;
pub use mcp::{McpTool, McpToolResult, StaticToolSource, ToolCall, ToolInvoker, ToolSource};
pub use schema::{
    MalformedSchema, SchemaKind, SchemaNode, SchemaTranslator, ValidatedArguments,
    ValidationFailure, translate, translate_node, validate,
};
