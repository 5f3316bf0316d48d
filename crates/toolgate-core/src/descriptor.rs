//! Tool descriptors advertised to a model-invocation layer

use crate::config::{BridgeConfig, DEFAULT_TOOL_DESCRIPTION};
use crate::error::{BridgeError, BridgeResult};
use crate::mcp::McpTool;
use crate::schema::{SchemaNode, SchemaTranslator, ValidatedArguments, ValidationFailure, validate};
use serde_json::{Value, json};
use tracing::trace;

/// A tool as a model sees it: name, description and argument validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    schema: SchemaNode,
}

impl ToolDescriptor {
    /// Tool name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tool description (never empty)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Argument schema; always an object node
    pub fn schema(&self) -> &SchemaNode {
        &self.schema
    }

    /// Check model-produced arguments against this tool's schema
    pub fn validate(&self, arguments: Value) -> Result<ValidatedArguments, ValidationFailure> {
        validate(&self.schema, arguments)
    }
}

/// Builds descriptors from raw tool definitions
#[derive(Debug, Clone)]
pub struct Advertiser {
    translator: SchemaTranslator,
    default_description: String,
}

impl Advertiser {
    /// Advertiser with default depth bound and placeholder description
    pub fn new() -> Self {
        Self {
            translator: SchemaTranslator::new(),
            default_description: DEFAULT_TOOL_DESCRIPTION.to_string(),
        }
    }

    /// Advertiser honouring a loaded configuration
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            translator: config.translator(),
            default_description: config.tools.default_description.clone(),
        }
    }

    /// Use a specific translator
    pub fn with_translator(mut self, translator: SchemaTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Use a different placeholder description
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    /// Build one descriptor
    pub fn describe(&self, tool: &McpTool) -> BridgeResult<ToolDescriptor> {
        if tool.name.trim().is_empty() {
            return Err(BridgeError::invalid_descriptor("tool name must not be empty"));
        }

        let schema = self
            .translator
            .translate(&tool.input_schema)
            .map_err(|e| BridgeError::malformed_schema(&tool.name, e))?;

        let description = tool
            .description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or(&self.default_description)
            .to_string();

        trace!(
            tool = %tool.name,
            fields = schema.as_object().map_or(0, |o| o.properties().len()),
            "Translated tool schema"
        );

        Ok(ToolDescriptor {
            name: tool.name.clone(),
            description,
            schema,
        })
    }

    /// Build one descriptor per definition, independently and in order.
    ///
    /// A definition that cannot be described yields its own error without
    /// affecting the others. Duplicate names are kept; uniqueness is the
    /// caller's concern.
    pub fn advertise(&self, tools: &[McpTool]) -> Vec<BridgeResult<ToolDescriptor>> {
        tools.iter().map(|tool| self.describe(tool)).collect()
    }
}

impl Default for Advertiser {
    fn default() -> Self {
        Self::new()
    }
}

/// Build descriptors with default settings
pub fn advertise(tools: &[McpTool]) -> Vec<BridgeResult<ToolDescriptor>> {
    Advertiser::new().advertise(tools)
}

/// Provider-specific tool definition formats
pub struct ToolConverter;

impl ToolConverter {
    /// Convert tools for OpenAI format (also accepted by Ollama)
    pub fn to_openai(tools: &[ToolDescriptor]) -> Vec<Value> {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name(),
                        "description": tool.description(),
                        "parameters": tool.schema().to_json_schema()
                    }
                })
            })
            .collect()
    }

    /// Convert tools for Anthropic format
    pub fn to_anthropic(tools: &[ToolDescriptor]) -> Vec<Value> {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "input_schema": tool.schema().to_json_schema()
                })
            })
            .collect()
    }
}
