//! Branch selector for repository-root nodes

use log::info;
use serde::Serialize;

use crate::domain::entities::{Node, NodeId};
use crate::domain::ports::TreeHost;
use crate::error::{BrowserError, BrowserResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchOption {
    pub name: String,
    pub selected: bool,
}

/// Selection control offered on a repository root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchSelector {
    pub node_id: NodeId,
    pub options: Vec<BranchOption>,
}

impl BranchSelector {
    pub fn selected(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.name.as_str())
    }

    /// Branch after the selected one, wrapping around
    pub fn next(&self) -> Option<&str> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let current = self.options.iter().position(|o| o.selected).unwrap_or(len - 1);
        self.options
            .get((current + 1) % len)
            .map(|o| o.name.as_str())
    }
}

/// Selector for `node`, or `None` if it is not a repository root with branches.
///
/// The node's current branch is pre-selected, falling back to its default.
pub fn branch_selector(node: &Node) -> Option<BranchSelector> {
    if !node.is_repository_root() || node.data.branches.is_empty() {
        return None;
    }

    let current = node.own_branch();
    let options = node
        .data
        .branches
        .iter()
        .map(|name| BranchOption {
            name: name.clone(),
            selected: Some(name.as_str()) == current,
        })
        .collect();

    Some(BranchSelector {
        node_id: node.id,
        options,
    })
}

/// Pin a repository root to its default branch if it has none yet.
/// Returns true if the node changed.
pub fn adopt_default_branch(node: &mut Node) -> bool {
    if !node.is_repository_root() || node.data.branch.is_some() {
        return false;
    }
    match node.data.default_branch.clone() {
        Some(default) => {
            node.data.branch = Some(default);
            true
        }
        None => false,
    }
}

/// Switch a repository root to `branch` and have the host re-fetch its subtree.
///
/// Returns false when `branch` is already selected; nothing is re-fetched then.
pub fn select_branch<H: TreeHost + ?Sized>(
    host: &mut H,
    id: NodeId,
    branch: &str,
) -> BrowserResult<bool> {
    let node = host
        .node_mut(id)
        .ok_or(BrowserError::NodeNotFound { id })?;

    if !node.is_repository_root() {
        return Err(BrowserError::NotRepositoryRoot {
            name: node.data.name.clone(),
        });
    }
    if !node.data.branches.iter().any(|b| b == branch) {
        return Err(BrowserError::UnknownBranch {
            branch: branch.to_string(),
            available: node.data.branches.clone(),
        });
    }
    if node.own_branch() == Some(branch) {
        return Ok(false);
    }

    info!("switching {} to branch '{}'", node.data.name, branch);
    node.data.branch = Some(branch.to_string());
    host.update_folder(id);
    Ok(true)
}
