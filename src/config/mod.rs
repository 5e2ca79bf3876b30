//! Configuration module for branchtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BRANCHTREE_*)
//! 3. Project config (.branchtree.toml)
//! 4. User config (~/.config/branchtree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BrowserConfig, ColorMode, Config, OutputConfig, StorageConfig};
