//! Command handlers
//!
//! Each command loads configuration, opens the snapshot store and builds a
//! [`Browser`] seeded with the repository root.

pub mod browse;
pub mod list;
pub mod remove;

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use branchtree::application::Browser;
use branchtree::config::Config;
use branchtree::domain::ports::RemoteStore;
use branchtree::domain::value_objects::Placement;
use branchtree::infrastructure::{SnapshotStore, WaterButlerApi};

use crate::ui::output::print_config_warnings;

/// Explicit `--config` file, else the project/user hierarchy
pub fn load_config(explicit: Option<&Path>, snapshot: &Path, json: bool) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            if !json {
                print_config_warnings(path, &warnings);
            }
            config.with_env_overrides()
        }
        None => Config::load_or_default(snapshot.parent()),
    };
    Ok(config)
}

/// Open `snapshot` and seed a browser with its repository root
pub fn open_browser(
    snapshot: &Path,
    config: &Config,
    placement: Option<Placement>,
    branch: Option<&str>,
) -> Result<(Browser<WaterButlerApi>, SnapshotStore)> {
    let store = SnapshotStore::open(snapshot)?;
    let root = store
        .root()
        .with_context(|| format!("snapshot {} has no repository", snapshot.display()))?;

    let project = if config.storage.project.is_empty() {
        root.data.name.clone()
    } else {
        config.storage.project.clone()
    };
    let storage = WaterButlerApi::new(&config.storage.base_url, project)?;

    let placement = placement.unwrap_or(config.browser.placement);
    let mut browser = Browser::new(root, storage, placement)
        .with_notice_delay(config.browser.notice_delay());

    if let Some(branch) = branch {
        let root = browser.tree().root();
        browser.select_branch(root, branch)?;
    }
    debug!(
        "opened {} ({}) at {}",
        snapshot.display(),
        placement,
        config.storage.base_url
    );

    Ok((browser, store))
}
