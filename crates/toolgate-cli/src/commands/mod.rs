//! CLI commands

pub mod check;
pub mod config;
pub mod export;
pub mod inspect;

use anyhow::Context;
use std::path::Path;
use toolgate_core::{Advertiser, BridgeConfig, StaticToolSource, ToolCatalog};

/// Load a saved tool listing and build the catalog the way a live client would
pub(crate) async fn load_catalog(config: &BridgeConfig, tools: &Path) -> anyhow::Result<ToolCatalog> {
    let source = StaticToolSource::from_file(tools)
        .with_context(|| format!("Failed to read tool listing {}", tools.display()))?;
    let catalog = ToolCatalog::load(&source, &Advertiser::from_config(config))
        .await
        .with_context(|| format!("Failed to build catalog from {}", tools.display()))?;
    tracing::debug!("Loaded {} tools from {}", catalog.len(), tools.display());
    Ok(catalog)
}
