//! In-memory tree host
//!
//! Arena of nodes keyed by id. Tracks which folders have had their children
//! fetched, which are expanded, and the notice currently shown on each node.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use log::debug;

use crate::domain::entities::{Node, NodeId, NodeRecord};
use crate::domain::ports::TreeHost;
use crate::domain::value_objects::Notice;

#[derive(Debug, Clone)]
struct PostedNotice {
    notice: Notice,
    posted_at: Instant,
}

impl PostedNotice {
    fn is_live(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) < self.notice.dismiss_after
    }
}

/// A visible row: node id and depth (0 = root)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode {
    pub id: NodeId,
    pub depth: usize,
}

#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: BTreeMap<NodeId, Node>,
    children: HashMap<NodeId, Vec<NodeId>>,
    loaded: HashSet<NodeId>,
    expanded: HashSet<NodeId>,
    notices: HashMap<NodeId, PostedNotice>,
    root: NodeId,
    next_id: u64,
}

impl NodeTree {
    /// Create a tree holding only its root
    pub fn new(root: NodeRecord) -> Self {
        let root_id = NodeId(1);
        let mut nodes = BTreeMap::new();
        nodes.insert(root_id, Node::new(root_id, None, root));
        Self {
            nodes,
            children: HashMap::new(),
            loaded: HashSet::new(),
            expanded: HashSet::new(),
            notices: HashMap::new(),
            root: root_id,
            next_id: 2,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Folder whose children have not been fetched (or were dropped)
    pub fn needs_fetch(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.is_folder()) && !self.loaded.contains(&id)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expand(&mut self, id: NodeId) {
        if self.nodes.get(&id).is_some_and(|n| n.is_folder()) {
            self.expanded.insert(id);
        }
    }

    pub fn collapse(&mut self, id: NodeId) {
        self.expanded.remove(&id);
    }

    /// Depth-first list of nodes under expanded folders
    pub fn visible(&self) -> Vec<VisibleNode> {
        let mut out = Vec::new();
        self.collect_visible(self.root, 0, &mut out);
        out
    }

    fn collect_visible(&self, id: NodeId, depth: usize, out: &mut Vec<VisibleNode>) {
        out.push(VisibleNode { id, depth });
        if self.expanded.contains(&id) {
            for &child in self.children.get(&id).map(Vec::as_slice).unwrap_or(&[]) {
                self.collect_visible(child, depth + 1, out);
            }
        }
    }

    /// Loaded node with the given path
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|n| n.data.path == path)
            .map(|n| n.id)
    }

    /// Notice on `id` that has not yet auto-dismissed at `now`
    pub fn notice(&self, id: NodeId, now: Instant) -> Option<&Notice> {
        self.notices
            .get(&id)
            .filter(|posted| posted.is_live(now))
            .map(|posted| &posted.notice)
    }

    /// Number of live notices at `now`
    pub fn notice_count(&self, now: Instant) -> usize {
        self.notices.values().filter(|p| p.is_live(now)).count()
    }

    /// Drop dismissed notices; returns how many were removed
    pub fn expire_notices(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|_, posted| posted.is_live(now));
        before - self.notices.len()
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                self.remove_subtree(child);
            }
        }
        self.nodes.remove(&id);
        self.loaded.remove(&id);
        self.expanded.remove(&id);
        self.notices.remove(&id);
    }
}

impl TreeHost for NodeTree {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.children.get(&id).cloned().unwrap_or_default()
    }

    fn attach_children(&mut self, parent_id: NodeId, records: Vec<NodeRecord>) -> Vec<NodeId> {
        if !self.nodes.contains_key(&parent_id) {
            return Vec::new();
        }

        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            let id = NodeId(self.next_id);
            self.next_id += 1;
            self.nodes.insert(id, Node::new(id, Some(parent_id), record));
            ids.push(id);
        }

        self.children
            .entry(parent_id)
            .or_default()
            .extend(ids.iter().copied());
        self.loaded.insert(parent_id);
        ids
    }

    fn delete_node(&mut self, parent_id: NodeId, id: NodeId) -> bool {
        let Some(siblings) = self.children.get_mut(&parent_id) else {
            return false;
        };
        let Some(pos) = siblings.iter().position(|&c| c == id) else {
            return false;
        };
        siblings.remove(pos);
        self.remove_subtree(id);
        debug!("removed node {} from {}", id, parent_id);
        true
    }

    fn update_folder(&mut self, id: NodeId) {
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                self.remove_subtree(child);
            }
        }
        self.loaded.remove(&id);
    }

    fn notify(&mut self, id: NodeId, notice: Notice) {
        if self.nodes.contains_key(&id) {
            self.notices.insert(
                id,
                PostedNotice {
                    notice,
                    posted_at: Instant::now(),
                },
            );
        }
    }
}
