//! Error types for toolgate

use crate::schema::{MalformedSchema, ValidationFailure};
use thiserror::Error;

/// Result type alias for toolgate operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Main error type for toolgate
#[derive(Debug, Error, Clone)]
pub enum BridgeError {
    /// A tool schema could not be translated
    #[error("Tool '{tool}': {source}")]
    MalformedSchema {
        tool: String,
        #[source]
        source: MalformedSchema,
    },

    /// Arguments rejected by the tool's schema
    #[error("Invalid arguments for tool '{tool}': {failure}")]
    Validation {
        tool: String,
        failure: ValidationFailure,
    },

    /// No tool with this name is advertised
    #[error("Tool not found: {name}")]
    ToolNotFound { name: String },

    /// Two tool definitions share a name
    #[error("Duplicate tool name: {name}")]
    DuplicateTool { name: String },

    /// Tool definition cannot be advertised
    #[error("Invalid tool descriptor: {message}")]
    InvalidDescriptor { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io { message: String },

    /// JSON/TOML (de)serialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The invoker failed to run the tool
    #[error("Invocation of '{tool}' failed: {message}")]
    Invocation { tool: String, message: String },
}

impl BridgeError {
    /// Create a new MalformedSchema error
    pub fn malformed_schema(tool: impl Into<String>, source: MalformedSchema) -> Self {
        Self::MalformedSchema {
            tool: tool.into(),
            source,
        }
    }

    /// Create a new Validation error
    pub fn validation(tool: impl Into<String>, failure: ValidationFailure) -> Self {
        Self::Validation {
            tool: tool.into(),
            failure,
        }
    }

    /// Create a new ToolNotFound error
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    /// Create a new DuplicateTool error
    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool { name: name.into() }
    }

    /// Create a new InvalidDescriptor error
    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new Invocation error
    pub fn invocation(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedSchema { .. } => "TOOLGATE_MALFORMED_SCHEMA",
            Self::Validation { .. } => "TOOLGATE_VALIDATION",
            Self::ToolNotFound { .. } => "TOOLGATE_TOOL_NOT_FOUND",
            Self::DuplicateTool { .. } => "TOOLGATE_DUPLICATE_TOOL",
            Self::InvalidDescriptor { .. } => "TOOLGATE_INVALID_DESCRIPTOR",
            Self::Config { .. } => "TOOLGATE_CONFIG",
            Self::Io { .. } => "TOOLGATE_IO",
            Self::Serialization { .. } => "TOOLGATE_SERIALIZATION",
            Self::Invocation { .. } => "TOOLGATE_INVOCATION",
        }
    }

    /// Whether the caller can retry, possibly with corrected arguments
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Invocation { .. })
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BridgeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaNode, validate};
    use serde_json::json;

    #[test]
    fn test_validation_error_is_retryable() {
        let failure = validate(&SchemaNode::String, json!(1)).unwrap_err();
        let err = BridgeError::validation("roll_dice", failure);

        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "TOOLGATE_VALIDATION");
        assert_eq!(
            err.to_string(),
            "Invalid arguments for tool 'roll_dice': Invalid value at <root>: expected string, got number"
        );
    }

    #[test]
    fn test_lookup_errors_are_not_retryable() {
        assert!(!BridgeError::tool_not_found("nope").is_retryable());
        assert!(!BridgeError::duplicate_tool("twice").is_retryable());
        assert!(!BridgeError::config("bad").is_retryable());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: BridgeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.error_code(), "TOOLGATE_SERIALIZATION");
    }
}
