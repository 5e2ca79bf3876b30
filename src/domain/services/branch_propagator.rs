//! Branch context propagation
//!
//! Lazy-loaded children never carry a branch of their own; they take the
//! effective branch of the folder they were loaded under.

use log::debug;

use crate::domain::entities::{NodeData, NodeId, NodeRecord};
use crate::domain::ports::TreeHost;

/// Effective branch of `id`: its own branch, else the nearest ancestor's.
///
/// A repository root without an explicit branch contributes its default branch.
pub fn effective_branch<H: TreeHost + ?Sized>(host: &H, id: NodeId) -> Option<String> {
    let mut current = host.node(id);
    while let Some(node) = current {
        if let Some(branch) = node.own_branch() {
            return Some(branch.to_string());
        }
        current = node.parent_id.and_then(|parent| host.node(parent));
    }
    None
}

/// Merge a parent's branch context into a child's raw data.
///
/// An explicit child branch always wins.
pub fn inherit_branch(parent_branch: Option<&str>, mut child: NodeData) -> NodeData {
    inherit_into(parent_branch, &mut child);
    child
}

fn inherit_into(parent_branch: Option<&str>, child: &mut NodeData) -> bool {
    match (&child.branch, parent_branch) {
        (None, Some(branch)) => {
            child.branch = Some(branch.to_string());
            true
        }
        _ => false,
    }
}

/// Propagate the parent's effective branch to freshly materialized children.
///
/// Returns how many children were assigned a branch. Re-running on the same
/// children assigns nothing.
pub fn propagate_branch<H: TreeHost + ?Sized>(
    host: &mut H,
    parent_id: NodeId,
    children: &[NodeId],
) -> usize {
    let parent_branch = effective_branch(host, parent_id);
    let mut assigned = 0;

    for &child_id in children {
        if let Some(child) = host.node_mut(child_id) {
            if inherit_into(parent_branch.as_deref(), &mut child.data) {
                assigned += 1;
            }
        }
    }

    debug!(
        "propagated branch {:?} from {} to {}/{} children",
        parent_branch,
        parent_id,
        assigned,
        children.len()
    );
    assigned
}

/// Stamp an upload response with the branch of the folder it landed in
pub fn stamp_upload_response(folder_branch: Option<&str>, record: &mut NodeRecord) {
    record.data.branch = folder_branch.map(str::to_string);
}
