//! Check command implementation

use super::load_catalog;
use crate::console::CliConsole;
use anyhow::Context;
use std::path::Path;
use toolgate_core::{BridgeConfig, BridgeError, ToolCall, ToolCatalog};

/// Validate a saved model tool call against the listed tools
pub async fn run(config: &BridgeConfig, tools: &Path, call: &Path) -> anyhow::Result<()> {
    let catalog = load_catalog(config, tools).await?;
    let call = read_call(call)?;
    check_call(&catalog, &call, &CliConsole::new(false))
}

fn read_call(path: &Path) -> anyhow::Result<ToolCall> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tool call {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse tool call {}", path.display()))
}

fn check_call(catalog: &ToolCatalog, call: &ToolCall, console: &CliConsole) -> anyhow::Result<()> {
    match catalog.check(call) {
        Ok(arguments) => {
            console.success(&format!("Call to '{}' is valid", call.name));
            println!("{}", serde_json::to_string_pretty(arguments.as_value())?);
            Ok(())
        }
        Err(BridgeError::Validation { tool, failure }) => {
            console.error(&failure.to_string());
            println!("{}", failure.feedback());
            anyhow::bail!("Call to '{}' was rejected", tool)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use toolgate_core::{McpTool, advertise};

    fn catalog() -> ToolCatalog {
        let tool = McpTool::new("rollDice").with_input_schema(json!({
            "type": "object",
            "properties": { "numDice": { "type": "integer" } },
            "required": ["numDice"]
        }));
        let descriptors = advertise(&[tool]).into_iter().collect::<Result<_, _>>();
        ToolCatalog::from_descriptors(descriptors.unwrap()).unwrap()
    }

    #[test]
    fn test_read_call_with_string_arguments() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "rollDice", "arguments": "{{\"numDice\": 2}}"}}"#).unwrap();

        let call = read_call(file.path()).unwrap();
        assert_eq!(call.name, "rollDice");
        assert_eq!(call.arguments, json!({ "numDice": 2 }));
    }

    #[test]
    fn test_read_call_rejects_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = read_call(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse tool call"));
    }

    #[test]
    fn test_check_call_outcomes() {
        let catalog = catalog();
        let console = CliConsole::new(false);

        let valid = ToolCall::new("rollDice", json!({ "numDice": 2 }));
        assert!(check_call(&catalog, &valid, &console).is_ok());

        let invalid = ToolCall::new("rollDice", json!({ "numDice": "2" }));
        let err = check_call(&catalog, &invalid, &console).unwrap_err();
        assert_eq!(err.to_string(), "Call to 'rollDice' was rejected");

        let unknown = ToolCall::new("flipCoin", json!({}));
        let err = check_call(&catalog, &unknown, &console).unwrap_err();
        assert!(err.to_string().contains("flipCoin"));
    }
}
