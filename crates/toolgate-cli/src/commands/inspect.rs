//! Inspect command implementation

use super::load_catalog;
use crate::args::OutputFormat;
use crate::console::CliConsole;
use colored::*;
use serde_json::json;
use std::path::Path;
use toolgate_core::schema::ObjectSchema;
use toolgate_core::{BridgeConfig, SchemaNode};

/// Show each listed tool with its translated schema
pub async fn run(
    config: &BridgeConfig,
    tools: &Path,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose);
    let catalog = load_catalog(config, tools).await?;
    console.info(&format!("{} tools listed in {}", catalog.len(), tools.display()));

    match format {
        OutputFormat::Json => {
            let listing: Vec<_> = catalog
                .descriptors()
                .iter()
                .map(|tool| {
                    json!({
                        "name": tool.name(),
                        "description": tool.description(),
                        "inputSchema": tool.schema().to_json_schema(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => {
            if catalog.is_empty() {
                console.warn("No tools listed");
                return Ok(());
            }
            console.print_header("Tools");
            for tool in catalog.descriptors() {
                println!();
                println!("{} {}", tool.name().cyan().bold(), tool.description().dimmed());
                for line in render_schema(tool.schema(), 1) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

/// Render the fields of a schema as an indented tree
fn render_schema(node: &SchemaNode, indent: usize) -> Vec<String> {
    let pad = "  ".repeat(indent);
    match node.as_object() {
        Some(object) if object.is_empty() => vec![format!("{}(no arguments)", pad)],
        Some(object) => render_fields(object, indent),
        None => vec![format!("{}{}", pad, describe(node))],
    }
}

fn render_fields(object: &ObjectSchema, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (name, child) in object.properties() {
        let marker = if object.is_required(name) {
            " (required)"
        } else {
            ""
        };
        lines.push(format!(
            "{}{}: {}{}",
            "  ".repeat(indent),
            name,
            describe(child),
            marker
        ));
        if let Some(nested) = nested_object(child).filter(|o| !o.is_empty()) {
            lines.extend(render_fields(nested, indent + 1));
        }
    }
    for name in object.undeclared_required() {
        lines.push(format!("{}{}: any (required)", "  ".repeat(indent), name));
    }
    lines
}

/// One-word shape of a node, `array of <items>` for arrays
fn describe(node: &SchemaNode) -> String {
    match node {
        SchemaNode::Array { items } => format!("array of {}", describe(items)),
        other => other.kind().to_string(),
    }
}

/// Object schema reached through any number of array levels
fn nested_object(node: &SchemaNode) -> Option<&ObjectSchema> {
    match node {
        SchemaNode::Object(object) => Some(object),
        SchemaNode::Array { items } => nested_object(items),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_core::translate;

    #[test]
    fn test_render_flat_schema() {
        let node = translate(&json!({
            "type": "object",
            "properties": {
                "numDice": { "type": "integer" },
                "label": { "type": "string" },
                "texts": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["numDice"]
        }))
        .unwrap();

        assert_eq!(
            render_schema(&node, 1),
            [
                "  label: string",
                "  numDice: integer (required)",
                "  texts: array of string",
            ]
        );
    }

    #[test]
    fn test_render_nested_objects() {
        let node = translate(&json!({
            "type": "object",
            "properties": {
                "rolls": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": { "faces": { "type": "integer" } },
                        "required": ["faces"]
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(
            render_schema(&node, 0),
            ["rolls: array of object", "  faces: integer (required)"]
        );
    }

    #[test]
    fn test_render_undeclared_required() {
        let node = translate(&json!({
            "type": "object",
            "properties": { "seed": { "type": "string" } },
            "required": ["token"]
        }))
        .unwrap();

        assert_eq!(
            render_schema(&node, 1),
            ["  seed: string", "  token: any (required)"]
        );
    }

    #[test]
    fn test_render_empty_schema() {
        assert_eq!(
            render_schema(&SchemaNode::empty_object(), 1),
            ["  (no arguments)"]
        );
    }
}
