//! Remote delete request emitted when a delete is confirmed

use serde::Serialize;

use crate::domain::entities::NodeId;

/// Everything the transport needs to issue the delete, and the workflow
/// needs to reconcile the tree once it completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub name: String,
    pub path: String,
    pub provider: String,
    pub branch: Option<String>,
    pub sha: String,
    /// Storage-proxy delete target
    pub url: String,
}
