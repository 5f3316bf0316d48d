//! CLI argument definitions using clap
//!
//! - toolgate inspect tools.json              # Show translated tool schemas
//! - toolgate export tools.json -P anthropic  # Provider tool definitions
//! - toolgate check tools.json call.json      # Validate a model tool call
//! - toolgate config show|init                # Configuration helpers

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default configuration file name used across all CLI commands.
pub const DEFAULT_CONFIG_FILE: &str = "toolgate.toml";

#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(about = "Typed tool-invocation bridge for MCP tool servers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "TOOLGATE_CONFIG")]
    pub config_file: PathBuf,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every listed tool with its description and translated schema
    Inspect {
        /// Saved `tools/list` response or bare array of tools
        tools: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print tool definitions in a model provider's format
    Export {
        /// Saved `tools/list` response or bare array of tools
        tools: PathBuf,

        /// Target provider
        #[arg(long, short = 'P', value_enum, default_value = "openai")]
        provider: Provider,
    },

    /// Validate a model tool call against the listed tools
    Check {
        /// Saved `tools/list` response or bare array of tools
        tools: PathBuf,

        /// Tool call JSON (`{"name": ..., "args": {...}}`)
        call: PathBuf,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tree
    Text,
    /// JSON Schema per tool
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// OpenAI / Ollama function definitions
    Openai,
    /// Anthropic tool definitions
    Anthropic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["toolgate", "check", "tools.json", "call.json"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Check { tools, call } => {
                assert_eq!(tools, PathBuf::from("tools.json"));
                assert_eq!(call, PathBuf::from("call.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_export_provider() {
        let cli =
            Cli::try_parse_from(["toolgate", "export", "tools.json", "-P", "anthropic", "-v"])
                .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Export {
                provider: Provider::Anthropic,
                ..
            }
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["toolgate"]).is_err());
    }
}
