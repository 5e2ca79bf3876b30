//! Tree node entity
//!
//! A node is owned by the tree host. The core only reads it and mutates
//! attributes in place (branch assignment); identity is allocated by the host.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Host-allocated node identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// File or folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// Caller permission flags carried on every node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub edit: bool,
    #[serde(default = "default_view")]
    pub view: bool,
}

fn default_view() -> bool {
    true
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_only()
    }
}

impl Permissions {
    pub fn editable() -> Self {
        Self {
            edit: true,
            view: true,
        }
    }

    pub fn read_only() -> Self {
        Self {
            edit: false,
            view: true,
        }
    }
}

/// Provider-specific extras. `fileSha` is the revision id of a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileExtra {
    #[serde(rename = "fileSha", default, skip_serializing_if = "Option::is_none")]
    pub file_sha: Option<String>,

    /// Remaining provider fields, forwarded as query parameters on title links
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// External URLs present only on repository roots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl RepoUrls {
    pub fn is_empty(&self) -> bool {
        self.zip.is_none() && self.repo.is_none()
    }
}

/// Attribute record of a node, as delivered by the storage proxy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default)]
    pub extra: FileExtra,
    #[serde(default, skip_serializing_if = "RepoUrls::is_empty")]
    pub urls: RepoUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addon_fullname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
}

fn default_provider() -> String {
    "github".to_string()
}

impl NodeData {
    /// Minimal record with a name and path
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            provider: default_provider(),
            branch: None,
            default_branch: None,
            branches: Vec::new(),
            permissions: Permissions::default(),
            extra: FileExtra::default(),
            urls: RepoUrls::default(),
            addon_fullname: None,
            node_api_url: None,
            icon_url: None,
            downloads: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.extra.file_sha = Some(sha.into());
        self
    }
}

/// A record the host materializes into a node (lazy-load or upload response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub kind: NodeKind,
    #[serde(flatten)]
    pub data: NodeData,
}

impl NodeRecord {
    pub fn file(data: NodeData) -> Self {
        Self {
            kind: NodeKind::File,
            data,
        }
    }

    pub fn folder(data: NodeData) -> Self {
        Self {
            kind: NodeKind::Folder,
            data,
        }
    }
}

/// A node in the host tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Lookup-only reference to the parent; the tree owns both nodes
    pub parent_id: Option<NodeId>,
    pub kind: NodeKind,
    pub data: NodeData,
}

impl Node {
    pub fn new(id: NodeId, parent_id: Option<NodeId>, record: NodeRecord) -> Self {
        Self {
            id,
            parent_id,
            kind: record.kind,
            data: record.data,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Top-level connection to an external repository
    pub fn is_repository_root(&self) -> bool {
        self.data.addon_fullname.is_some()
    }

    pub fn can_edit(&self) -> bool {
        self.data.permissions.edit
    }

    pub fn file_sha(&self) -> Option<&str> {
        self.data.extra.file_sha.as_deref()
    }

    /// The node's own branch, falling back to its default branch.
    ///
    /// Only repository roots carry a default branch, so for other nodes this
    /// is the explicit or inherited branch attribute.
    pub fn own_branch(&self) -> Option<&str> {
        self.data
            .branch
            .as_deref()
            .or(self.data.default_branch.as_deref())
    }
}
