//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use anyhow::Context;
use toolgate_core::BridgeConfig;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Inspect { tools, format } => {
            let config = load_config(&cli)?;
            commands::inspect::run(&config, tools, *format, cli.verbose).await
        }
        Commands::Export { tools, provider } => {
            let config = load_config(&cli)?;
            commands::export::run(&config, tools, *provider).await
        }
        Commands::Check { tools, call } => {
            let config = load_config(&cli)?;
            commands::check::run(&config, tools, call).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&load_config(&cli)?, &cli.config_file),
            // Must work even when the existing file is broken.
            ConfigAction::Init { force } => commands::config::init(&cli.config_file, *force),
        },
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BridgeConfig> {
    BridgeConfig::load(Some(&cli.config_file))
        .with_context(|| format!("Failed to load {}", cli.config_file.display()))
}
