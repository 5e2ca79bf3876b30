//! Domain Entities
//!
//! - `Node` - An element of the host tree (file or folder)
//! - `NodeRecord` - Attribute record the host turns into a node

mod node;

pub use node::{FileExtra, Node, NodeData, NodeId, NodeKind, NodeRecord, Permissions, RepoUrls};
