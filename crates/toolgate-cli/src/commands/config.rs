//! Config command implementation

use crate::console::CliConsole;
use anyhow::Context;
use std::path::Path;
use toolgate_core::BridgeConfig;

/// Print the effective configuration
pub fn show(config: &BridgeConfig, path: &Path) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    if path.exists() {
        console.info(&format!("Loaded from {}", path.display()));
    } else {
        console.info(&format!("{} not found, using defaults", path.display()));
    }

    console.print_header("Configuration");
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Write a default configuration file
pub fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = BridgeConfig::default().to_toml_string()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    console.success(&format!("Wrote {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("toolgate.toml");

        init(&path, false).unwrap();
        let config = BridgeConfig::from_file(&path).unwrap();
        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("toolgate.toml");
        std::fs::write(&path, "[schema]\nmax_depth = 8\n").unwrap();

        let err = init(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(BridgeConfig::from_file(&path).unwrap().schema.max_depth, 8);

        init(&path, true).unwrap();
        assert_eq!(BridgeConfig::from_file(&path).unwrap(), BridgeConfig::default());
    }
}
