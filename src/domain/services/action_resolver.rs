//! Row action resolution
//!
//! Decides which action buttons a node gets, in render order.

use serde::Serialize;

use crate::domain::entities::{Node, NodeKind, Permissions};

/// Actions a row can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Upload,
    DownloadZip,
    OpenRepository,
    DownloadFile,
    Delete,
}

impl ActionKind {
    /// File actions need the provider revision id to build their URL
    pub fn needs_revision(&self) -> bool {
        matches!(self, ActionKind::DownloadFile | ActionKind::Delete)
    }
}

/// One action button of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub style: &'static str,
    /// Rendered hidden and revealed on hover
    pub hidden_until_hover: bool,
    pub enabled: bool,
}

impl ActionDescriptor {
    fn new(kind: ActionKind) -> Self {
        let (label, icon, style) = match kind {
            ActionKind::Upload => (
                "Upload",
                "icon-upload-alt",
                "fangorn-clickable btn btn-default btn-xs",
            ),
            ActionKind::DownloadZip => (
                "Download zip",
                "icon-download-alt",
                "fangorn-clickable btn btn-info btn-xs",
            ),
            ActionKind::OpenRepository => (
                "Open repository",
                "icon-external-link",
                "btn btn-primary btn-xs",
            ),
            ActionKind::DownloadFile => ("Download", "icon-download-alt", "btn btn-info btn-xs"),
            ActionKind::Delete => ("Delete", "icon-remove", "m-l-lg text-danger fg-hover-hide"),
        };
        Self {
            kind,
            label,
            icon,
            style,
            hidden_until_hover: false,
            enabled: true,
        }
    }
}

/// Resolve the ordered action buttons for `node` under `permissions`.
///
/// Folders: upload (edit only), then download-zip and open-repository for
/// repository roots. Files: download, then delete (edit only, hidden until
/// hover). File actions are disabled when the node has no `fileSha`.
pub fn resolve_actions(node: &Node, permissions: Permissions) -> Vec<ActionDescriptor> {
    let mut actions = Vec::new();

    match node.kind {
        NodeKind::Folder => {
            if permissions.edit {
                actions.push(ActionDescriptor::new(ActionKind::Upload));
            }
            if node.is_repository_root() {
                actions.push(ActionDescriptor::new(ActionKind::DownloadZip));
                actions.push(ActionDescriptor::new(ActionKind::OpenRepository));
            }
        }
        NodeKind::File => {
            actions.push(ActionDescriptor::new(ActionKind::DownloadFile));

            if permissions.edit {
                let mut delete = ActionDescriptor::new(ActionKind::Delete);
                delete.hidden_until_hover = true;
                actions.push(delete);
            }
        }
    }

    let has_revision = node.file_sha().is_some();
    for action in &mut actions {
        action.enabled = has_revision || !action.kind.needs_revision();
    }
    actions
}
