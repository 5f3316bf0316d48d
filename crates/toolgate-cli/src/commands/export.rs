//! Export command implementation

use super::load_catalog;
use crate::args::Provider;
use std::path::Path;
use toolgate_core::{BridgeConfig, ToolConverter};

/// Print the listed tools as provider tool definitions
pub async fn run(config: &BridgeConfig, tools: &Path, provider: Provider) -> anyhow::Result<()> {
    let catalog = load_catalog(config, tools).await?;

    let definitions = match provider {
        Provider::Openai => ToolConverter::to_openai(catalog.descriptors()),
        Provider::Anthropic => ToolConverter::to_anthropic(catalog.descriptors()),
    };

    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}
