//! Tree-view host port
//!
//! The host owns node identity, children order, expansion and rendering.
//! The core only looks nodes up, mutates their attributes, and asks the host
//! to remove nodes, re-fetch folders, or show notices.

use crate::domain::entities::{Node, NodeId, NodeRecord};
use crate::domain::value_objects::Notice;

pub trait TreeHost {
    fn node(&self, id: NodeId) -> Option<&Node>;

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node>;

    /// Loaded children of `id`, in display order
    fn children(&self, id: NodeId) -> Vec<NodeId>;

    /// Materialize lazy-loaded records under `parent_id`, returning their new ids
    fn attach_children(&mut self, parent_id: NodeId, records: Vec<NodeRecord>) -> Vec<NodeId>;

    /// Remove `id` (and its subtree) from under `parent_id`.
    /// Returns false when `id` is not a child of `parent_id`.
    fn delete_node(&mut self, parent_id: NodeId, id: NodeId) -> bool;

    /// Drop cached children of `id` so the next expansion lazy-loads afresh
    fn update_folder(&mut self, id: NodeId);

    /// Show a transient notice on a node
    fn notify(&mut self, id: NodeId, notice: Notice);
}
