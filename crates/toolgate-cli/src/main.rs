//! Toolgate CLI application
//!
//! Offline front end for the tool-invocation bridge. Works on a saved
//! `tools/list` response so tool schemas and model tool calls can be
//! inspected and checked without a live server.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/toolgate-cli
//! ```

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose raises the fallback level.
    let fallback = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    router::route(cli).await
}
