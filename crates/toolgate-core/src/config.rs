//! Bridge configuration
//!
//! Layers, later ones winning: built-in defaults, an optional TOML file,
//! then `TOOLGATE_*` environment variables.

use crate::error::{BridgeError, BridgeResult};
use crate::schema::SchemaTranslator;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Default bound on schema nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Description advertised for tools that do not provide one
pub const DEFAULT_TOOL_DESCRIPTION: &str = "No description provided";

/// Environment variable overriding `schema.max_depth`
pub const ENV_MAX_DEPTH: &str = "TOOLGATE_MAX_DEPTH";

/// Environment variable overriding `tools.default_description`
pub const ENV_DEFAULT_DESCRIPTION: &str = "TOOLGATE_DEFAULT_DESCRIPTION";

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_description() -> String {
    DEFAULT_TOOL_DESCRIPTION.to_string()
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Schema translation settings
    #[serde(default)]
    pub schema: SchemaConfig,
    /// Tool advertisement settings
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Schema translation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Maximum nesting accepted from a remote schema description
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tool advertisement settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Description used when a tool declares none
    #[serde(default = "default_description")]
    pub default_description: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_description: DEFAULT_TOOL_DESCRIPTION.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> BridgeResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults, then the file if it exists, then the environment
    pub fn load(path: Option<&Path>) -> BridgeResult<Self> {
        let mut config = Self::default();
        match path {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {}", path.display());
                config.merge(Self::from_file(path)?);
            }
            Some(path) => tracing::debug!("No config at {}, using defaults", path.display()),
            None => {}
        }
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TOOLGATE_*` overrides from the process environment
    pub fn apply_env(&mut self) -> BridgeResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> BridgeResult<()> {
        if let Some(depth) = lookup(ENV_MAX_DEPTH) {
            self.schema.max_depth = depth
                .trim()
                .parse()
                .map_err(|_| BridgeError::config(format!("Invalid {} value", ENV_MAX_DEPTH)))?;
        }
        if let Some(description) = lookup(ENV_DEFAULT_DESCRIPTION) {
            self.tools.default_description = description;
        }
        Ok(())
    }

    /// Merge with another config (other takes precedence where non-default)
    pub fn merge(&mut self, other: BridgeConfig) {
        if other.schema.max_depth != DEFAULT_MAX_DEPTH {
            self.schema.max_depth = other.schema.max_depth;
        }
        if other.tools.default_description != DEFAULT_TOOL_DESCRIPTION {
            self.tools.default_description = other.tools.default_description;
        }
    }

    /// Reject values the bridge cannot run with
    pub fn validate(&self) -> BridgeResult<()> {
        if self.schema.max_depth == 0 {
            return Err(BridgeError::config("schema.max_depth must be at least 1"));
        }
        if self.tools.default_description.trim().is_empty() {
            return Err(BridgeError::config(
                "tools.default_description must not be empty",
            ));
        }
        Ok(())
    }

    /// Translator honouring `schema.max_depth`
    pub fn translator(&self) -> SchemaTranslator {
        SchemaTranslator::with_max_depth(self.schema.max_depth)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> BridgeResult<String> {
        toml::to_string_pretty(self).map_err(|e| BridgeError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.schema.max_depth, 64);
        assert_eq!(config.tools.default_description, "No description provided");
        assert!(config.validate().is_ok());
        assert_eq!(config.translator().max_depth(), 64);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BridgeConfig::from_toml_str("[schema]\nmax_depth = 16\n").unwrap();
        assert_eq!(config.schema.max_depth, 16);
        assert_eq!(config.tools.default_description, DEFAULT_TOOL_DESCRIPTION);

        let empty = BridgeConfig::from_toml_str("").unwrap();
        assert_eq!(empty, BridgeConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BridgeConfig::from_toml_str("[schema]\nmax_depth = \"deep\"\n").unwrap_err();
        assert_eq!(err.error_code(), "TOOLGATE_CONFIG");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tools]\ndefault_description = \"Undocumented tool\"\n\n[schema]\nmax_depth = 8"
        )
        .unwrap();

        let config = BridgeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.schema.max_depth, 8);
        assert_eq!(config.tools.default_description, "Undocumented tool");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolgate.toml");

        assert!(BridgeConfig::from_file(&path).is_err());

        let config = BridgeConfig::load(Some(&path)).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_MAX_DEPTH, " 12 "),
            (ENV_DEFAULT_DESCRIPTION, "n/a"),
        ]
        .into_iter()
        .collect();

        let mut config = BridgeConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.schema.max_depth, 12);
        assert_eq!(config.tools.default_description, "n/a");
    }

    #[test]
    fn test_invalid_override() {
        let mut config = BridgeConfig::default();
        let err = config
            .apply_overrides(|key| (key == ENV_MAX_DEPTH).then(|| "lots".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_MAX_DEPTH));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let mut config = BridgeConfig::default();
        config.schema.max_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_prefers_non_default_values() {
        let mut base = BridgeConfig::default();
        base.schema.max_depth = 10;

        let mut other = BridgeConfig::default();
        other.tools.default_description = "later".to_string();

        base.merge(other);
        assert_eq!(base.schema.max_depth, 10);
        assert_eq!(base.tools.default_description, "later");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = BridgeConfig::default();
        config.schema.max_depth = 5;
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(BridgeConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
