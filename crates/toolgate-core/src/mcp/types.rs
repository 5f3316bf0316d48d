//! MCP wire types consumed and produced by the bridge

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Tool definition as listed by an MCP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    /// Tool name
    pub name: String,
    /// Tool description
    #[serde(default)]
    pub description: Option<String>,
    /// Input schema (JSON Schema), possibly absent
    #[serde(default)]
    pub input_schema: Value,
}

impl McpTool {
    /// Create a new MCP tool with no schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: Value::Null,
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set input schema
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }
}

/// Result of a `tools/list` request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToolsResult {
    /// Tools on this page
    #[serde(default)]
    pub tools: Vec<McpTool>,
    /// Pagination cursor for the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl ListToolsResult {
    /// Parse either a `tools/list` result object or a bare array of tools
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => Ok(Self {
                tools: serde_json::from_value(value)?,
                next_cursor: None,
            }),
            other => serde_json::from_value(other),
        }
    }
}

/// MCP tool execution result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolResult {
    /// Result content
    pub content: Vec<McpContent>,
    /// Whether the execution produced an error
    #[serde(default)]
    pub is_error: bool,
}

impl McpToolResult {
    /// Successful result with a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::text(text)],
            is_error: false,
        }
    }

    /// Error result with a single text block
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::text(text)],
            is_error: true,
        }
    }

    /// Join all content into one string
    pub fn to_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                McpContent::Text { text } => text.clone(),
                McpContent::Image { data, mime_type } => {
                    format!("[Image: {} ({} bytes)]", mime_type, data.len())
                }
                McpContent::Resource { resource } => format!("[Resource: {}]", resource.uri),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Content types in MCP responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum McpContent {
    /// Text content
    #[serde(rename = "text")]
    Text { text: String },
    /// Image content
    #[serde(rename = "image")]
    Image {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    /// Resource reference
    #[serde(rename = "resource")]
    Resource { resource: McpResourceRef },
}

impl McpContent {
    /// Create text content
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Reference to a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResourceRef {
    /// Resource URI
    pub uri: String,
    /// Resource text content
    #[serde(default)]
    pub text: Option<String>,
    /// Resource blob content (base64)
    #[serde(default)]
    pub blob: Option<String>,
}

/// A model's decision to call a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Call identifier assigned by the model, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the tool to call
    pub name: String,
    /// Arguments exactly as the model produced them
    #[serde(alias = "args", default, deserialize_with = "arguments_value")]
    pub arguments: Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            arguments,
        }
    }

    /// Set the call ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Accept arguments either inline or as a JSON-encoded string
fn arguments_value<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(encoded) if encoded.trim().is_empty() => Ok(Value::Null),
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(serde::de::Error::custom),
        other => Ok(other),
    }
}
