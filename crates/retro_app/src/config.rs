//! Application configuration file handling (retro.toml)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use retro_store::WriteFailurePolicy;
use retro_theme::{ColorScheme, ThemeSelection};
use serde::{Deserialize, Serialize};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Theme selection
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// `"light"`, `"dark"` or `"system"`
    #[serde(default)]
    pub selection: ThemeSelection,
    /// Host color-scheme preference, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<ColorScheme>,
}

/// Persistence settings
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory for persisted state. Absent means in-memory only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub write_failure: WriteFailurePolicy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"retro_store=debug"`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
