//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Placement, NOTICE_DISMISS_AFTER};
use crate::error::BrowserResult;

use super::loader::{self, ConfigWarning};

/// Tree view configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default)]
    pub placement: Placement,

    /// Auto-dismiss delay for node notices
    #[serde(default = "default_notice_ms")]
    pub notice_dismiss_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            notice_dismiss_ms: default_notice_ms(),
        }
    }
}

impl BrowserConfig {
    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }
}

fn default_notice_ms() -> u64 {
    NOTICE_DISMISS_AFTER.as_millis() as u64
}

/// Storage proxy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Project id sent as `nid`
    #[serde(default)]
    pub project: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project: String::new(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:7777".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BrowserResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BrowserResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_dir: Option<&Path>) -> Self {
        loader::load_or_default(project_dir)
    }

    /// Apply environment variable overrides (BRANCHTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
