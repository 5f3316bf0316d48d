//! Name-indexed set of advertised tools

use crate::descriptor::{Advertiser, ToolDescriptor};
use crate::error::{BridgeError, BridgeResult};
use crate::mcp::{ToolCall, ToolSource};
use crate::schema::ValidatedArguments;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Tools available for invocation, unique by name
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    /// Descriptors in advertisement order
    tools: Vec<ToolDescriptor>,
    /// Name to position in `tools`
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from descriptors, rejecting duplicate names
    pub fn from_descriptors(descriptors: Vec<ToolDescriptor>) -> BridgeResult<Self> {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.insert(descriptor)?;
        }
        Ok(catalog)
    }

    /// List, translate and register every tool a source advertises.
    ///
    /// A tool whose definition cannot be described is logged and left out;
    /// the rest of the listing still loads.
    #[instrument(skip_all, level = "debug")]
    pub async fn load(source: &dyn ToolSource, advertiser: &Advertiser) -> BridgeResult<Self> {
        let tools = source.list_tools().await?;
        debug!("Source advertised {} tools", tools.len());

        let mut catalog = Self::new();
        for result in advertiser.advertise(&tools) {
            match result {
                Ok(descriptor) => catalog.insert(descriptor)?,
                Err(err) => warn!(code = err.error_code(), "Skipping tool: {}", err),
            }
        }
        if catalog.len() < tools.len() {
            warn!("Loaded {} of {} listed tools", catalog.len(), tools.len());
        }
        Ok(catalog)
    }

    /// Add a descriptor; its name must not be taken
    pub fn insert(&mut self, descriptor: ToolDescriptor) -> BridgeResult<()> {
        if self.index.contains_key(descriptor.name()) {
            return Err(BridgeError::duplicate_tool(descriptor.name()));
        }
        self.index
            .insert(descriptor.name().to_string(), self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Look up a tool by name, failing if absent
    pub fn require(&self, name: &str) -> BridgeResult<&ToolDescriptor> {
        self.get(name)
            .ok_or_else(|| BridgeError::tool_not_found(name))
    }

    /// Resolve the tool a call names and validate its arguments.
    ///
    /// Missing (`null`) arguments are treated as an empty object.
    pub fn check(&self, call: &ToolCall) -> BridgeResult<ValidatedArguments> {
        let tool = self.require(&call.name).inspect_err(|_| {
            warn!(tool = %call.name, "Rejected call to unknown tool");
        })?;

        let arguments = match &call.arguments {
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };

        tool.validate(arguments).map_err(|failure| {
            warn!(tool = %call.name, path = %failure.path, "Rejected tool arguments");
            BridgeError::validation(&call.name, failure)
        })
    }

    /// Tool names in advertisement order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(ToolDescriptor::name)
    }

    /// Descriptors in advertisement order
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::advertise;
    use crate::mcp::{McpTool, StaticToolSource};
    use serde_json::json;

    fn describe_all(tools: &[McpTool]) -> Vec<ToolDescriptor> {
        advertise(tools)
            .into_iter()
            .collect::<BridgeResult<_>>()
            .unwrap()
    }

    #[test]
    fn test_from_descriptors_preserves_order() {
        let descriptors = describe_all(&[McpTool::new("b"), McpTool::new("a"), McpTool::new("c")]);
        let catalog = ToolCatalog::from_descriptors(descriptors).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(catalog.get("a").unwrap().name(), "a");
        assert!(catalog.get("z").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let descriptors = describe_all(&[McpTool::new("roll"), McpTool::new("roll")]);
        let err = ToolCatalog::from_descriptors(descriptors).unwrap_err();
        assert!(matches!(err, BridgeError::DuplicateTool { ref name } if name == "roll"));
    }

    #[test]
    fn test_require_missing_tool() {
        let catalog = ToolCatalog::new();
        assert!(catalog.is_empty());
        let err = catalog.require("roll").unwrap_err();
        assert_eq!(err.error_code(), "TOOLGATE_TOOL_NOT_FOUND");
    }

    #[test]
    fn test_check_resolves_and_validates() {
        let tool = McpTool::new("rollDice").with_input_schema(json!({
            "type": "object",
            "properties": { "numDice": { "type": "integer" } },
            "required": ["numDice"]
        }));
        let catalog = ToolCatalog::from_descriptors(describe_all(&[tool])).unwrap();

        let ok = catalog
            .check(&ToolCall::new("rollDice", json!({ "numDice": 2 })))
            .unwrap();
        assert_eq!(ok.get("numDice"), Some(&json!(2)));

        let err = catalog
            .check(&ToolCall::new("rollDice", Value::Null))
            .unwrap_err();
        assert!(err.to_string().contains("properties.numDice"));

        let err = catalog.check(&ToolCall::new("nope", json!({}))).unwrap_err();
        assert_eq!(err.error_code(), "TOOLGATE_TOOL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let source = StaticToolSource::new(vec![
            McpTool::new("rollDice").with_description("Roll dice"),
            McpTool::new("flipCoin"),
        ]);

        let catalog = ToolCatalog::load(&source, &Advertiser::new()).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("flipCoin").unwrap().description(),
            "No description provided"
        );
    }

    #[tokio::test]
    async fn test_load_skips_undescribable_tools() {
        let source = StaticToolSource::new(vec![
            McpTool::new("good").with_input_schema(json!({
                "type": "object",
                "properties": { "a": { "type": "string" } }
            })),
            McpTool::new("bad").with_input_schema(json!({
                "type": "object",
                "properties": { "a": null }
            })),
            McpTool::new(""),
        ]);

        let catalog = ToolCatalog::load(&source, &Advertiser::new()).await.unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["good"]);
        assert!(catalog.get("bad").is_none());
    }
}
