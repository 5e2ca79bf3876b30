//! Placement value object - which view the browser is embedded in

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the tree is rendered
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Full project file browser: name, actions and downloads columns
    #[default]
    ProjectFiles,
    /// Restricted embedded view: name column only
    Widget,
}

impl Placement {
    pub fn is_full_browser(&self) -> bool {
        matches!(self, Placement::ProjectFiles)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::ProjectFiles => "project-files",
            Placement::Widget => "widget",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project-files" | "projectfiles" | "full" => Ok(Placement::ProjectFiles),
            "widget" | "restricted" => Ok(Placement::Widget),
            other => Err(format!("unknown placement '{}'", other)),
        }
    }
}
