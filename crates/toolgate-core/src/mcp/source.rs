//! Seams to the tool-serving endpoint
//!
//! The bridge never talks to the network itself. A transport-backed client
//! implements these traits; tests and the offline CLI use [`StaticToolSource`].

use super::types::{ListToolsResult, McpTool, McpToolResult};
use crate::error::{BridgeError, BridgeResult};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Lists the tools an endpoint advertises
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Fetch every advertised tool definition
    async fn list_tools(&self) -> BridgeResult<Vec<McpTool>>;
}

/// Executes a tool on the endpoint.
///
/// Only ever handed arguments that passed validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    /// Call `name` with `arguments`
    async fn call_tool(&self, name: &str, arguments: Value) -> BridgeResult<McpToolResult>;
}

/// Tool listing held in memory, e.g. a saved `tools/list` response
#[derive(Debug, Clone, Default)]
pub struct StaticToolSource {
    tools: Vec<McpTool>,
}

impl StaticToolSource {
    /// Wrap an already-parsed listing
    pub fn new(tools: Vec<McpTool>) -> Self {
        Self { tools }
    }

    /// Parse a `tools/list` result object or a bare array of tools
    pub fn from_json(value: Value) -> BridgeResult<Self> {
        let listing = ListToolsResult::from_json(value)?;
        if listing.next_cursor.is_some() {
            tracing::warn!("Listing has a next page cursor; only the first page is loaded");
        }
        Ok(Self::new(listing.tools))
    }

    /// Read a saved listing from disk
    pub fn from_file(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BridgeError::Io {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_json(value)
    }

    /// Tools held by this source
    pub fn tools(&self) -> &[McpTool] {
        &self.tools
    }
}

#[async_trait]
impl ToolSource for StaticToolSource {
    async fn list_tools(&self) -> BridgeResult<Vec<McpTool>> {
        Ok(self.tools.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_source_lists_tools() {
        let source = StaticToolSource::from_json(json!({
            "tools": [{ "name": "rollDice" }, { "name": "flipCoin" }]
        }))
        .unwrap();

        let tools = source.list_tools().await.unwrap();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["rollDice", "flipCoin"]);
    }

    #[test]
    fn test_static_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "rollDice", "inputSchema": {{"type": "object"}}}}]"#).unwrap();

        let source = StaticToolSource::from_file(file.path()).unwrap();
        assert_eq!(source.tools().len(), 1);
    }

    #[test]
    fn test_static_source_missing_file() {
        let err = StaticToolSource::from_file("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.error_code(), "TOOLGATE_IO");
    }
}
