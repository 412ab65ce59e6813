//! Configuration loader
//!
//! Loads node settings from a YAML file:
//!
//! ```yaml
//! frame:
//!   output_mode: html        # html | output
//!   respond_now: true
//!   default_template: null
//! transaction:
//!   respond_now: false
//!   default_chain_id: eip155:8453
//! ```

use anyhow::{Context, Result};
use frame_types::KnownChain;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FRAME_NODES_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "frame-nodes.yaml";

/// Key the frame HTML is stored under in each output item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameOutputMode {
    /// `{ "html": ".." }`
    #[default]
    Html,
    /// `{ "output": ".." }`
    Output,
}

impl FrameOutputMode {
    pub fn field_name(&self) -> &'static str {
        match self {
            FrameOutputMode::Html => "html",
            FrameOutputMode::Output => "output",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameNodeConfig {
    pub output_mode: FrameOutputMode,
    /// Used when an item does not say whether to respond immediately
    pub respond_now: bool,
    /// Replaces the built-in empty document as fallback template
    pub default_template: Option<String>,
}

impl Default for FrameNodeConfig {
    fn default() -> Self {
        Self {
            output_mode: FrameOutputMode::Html,
            respond_now: true,
            default_template: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionNodeConfig {
    pub respond_now: bool,
    /// Chain used when an item carries no chain id
    pub default_chain_id: String,
}

impl Default for TransactionNodeConfig {
    fn default() -> Self {
        Self {
            respond_now: false,
            default_chain_id: KnownChain::default().caip2().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodesConfig {
    pub frame: FrameNodeConfig,
    pub transaction: TransactionNodeConfig,
}

impl NodesConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse node configuration")
    }
}

pub struct ConfigLoader {
    path: Option<PathBuf>,
    required: bool,
}

impl ConfigLoader {
    /// Load from an explicit file. The file must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            required: true,
        }
    }

    /// Resolve the config file from the environment.
    ///
    /// Resolution order:
    /// 1. `FRAME_NODES_CONFIG` environment variable (must exist)
    /// 2. `frame-nodes.yaml` in the working directory (optional)
    /// 3. Built-in defaults
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::new(path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self {
                path: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
                required: false,
            };
        }

        Self {
            path: None,
            required: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<NodesConfig> {
        let Some(path) = &self.path else {
            debug!("No node configuration file; using defaults");
            return Ok(NodesConfig::default());
        };

        if !self.required && !path.exists() {
            debug!("{} not found; using defaults", path.display());
            return Ok(NodesConfig::default());
        }

        info!("Loading node configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: NodesConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!(
            output_mode = config.frame.output_mode.field_name(),
            frame_respond_now = config.frame.respond_now,
            tx_respond_now = config.transaction.respond_now,
            "Loaded node configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = NodesConfig::default();
        assert_eq!(config.frame.output_mode, FrameOutputMode::Html);
        assert!(config.frame.respond_now);
        assert!(!config.transaction.respond_now);
        assert_eq!(config.transaction.default_chain_id, "eip155:8453");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = NodesConfig::from_yaml_str("frame:\n  output_mode: output\n").unwrap();
        assert_eq!(config.frame.output_mode, FrameOutputMode::Output);
        assert!(config.frame.respond_now);
        assert_eq!(config.transaction, TransactionNodeConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "frame:\n  respond_now: false\n  default_template: \"<html><head></head></html>\"\ntransaction:\n  default_chain_id: eip155:10"
        )
        .unwrap();

        let config = ConfigLoader::new(file.path()).load().unwrap();
        assert!(!config.frame.respond_now);
        assert_eq!(
            config.frame.default_template.as_deref(),
            Some("<html><head></head></html>")
        );
        assert_eq!(config.transaction.default_chain_id, "eip155:10");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::new(dir.path().join("absent.yaml")).load();
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frame: [not, a, map]").unwrap();
        let err = ConfigLoader::new(file.path()).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
