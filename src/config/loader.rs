//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::value_objects::Placement;
use crate::error::{BrowserError, BrowserResult};

use super::types::Config;

pub const PROJECT_CONFIG_FILE: &str = ".branchtree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BrowserResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BrowserError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `<project_dir>/.branchtree.toml`, the user config, or defaults
pub fn load_or_default(project_dir: Option<&Path>) -> Config {
    let candidates = project_dir
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("branchtree/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => {
                debug!("using config {}", path.display());
                return with_env_overrides(config);
            }
            Err(e) => debug!("skipping config {}: {}", path.display(), e),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (BRANCHTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // BRANCHTREE_PLACEMENT
    if let Some(placement) = lookup("BRANCHTREE_PLACEMENT") {
        if let Ok(placement) = placement.parse::<Placement>() {
            config.browser.placement = placement;
        }
    }

    // BRANCHTREE_STORAGE_URL
    if let Some(url) = lookup("BRANCHTREE_STORAGE_URL") {
        if !url.trim().is_empty() {
            config.storage.base_url = url.trim().to_string();
        }
    }

    // BRANCHTREE_NOTICE_MS
    if let Some(ms) = lookup("BRANCHTREE_NOTICE_MS") {
        if let Ok(ms) = ms.trim().parse::<u64>() {
            config.browser.notice_dismiss_ms = ms;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "browser",
        "placement",
        "notice_dismiss_ms",
        "storage",
        "base_url",
        "project",
        "output",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
