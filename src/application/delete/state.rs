//! Delete workflow state and outcomes

use crate::domain::entities::NodeId;
use crate::domain::ports::RemoteError;
use crate::domain::value_objects::DeleteRequest;
use crate::error::{BrowserError, BrowserResult};

/// Where the workflow currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    /// Confirmation modal is open for this node
    ConfirmPending { node_id: NodeId, name: String },
    /// Remote delete issued, waiting for completion
    Deleting { request: DeleteRequest },
}

impl DeleteState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DeleteState::Idle)
    }

    /// Node the workflow is busy with, if any
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            DeleteState::Idle => None,
            DeleteState::ConfirmPending { node_id, .. } => Some(*node_id),
            DeleteState::Deleting { request } => Some(request.node_id),
        }
    }

    pub(super) fn name(&self) -> Option<&str> {
        match self {
            DeleteState::Idle => None,
            DeleteState::ConfirmPending { name, .. } => Some(name),
            DeleteState::Deleting { request } => Some(&request.name),
        }
    }
}

/// Result of a delete activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Confirmation modal opened
    Confirming,
    /// No edit permission; a notice was shown instead
    Denied,
}

/// How a delete resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed { request: DeleteRequest },
    Failed { request: DeleteRequest, error: RemoteError },
}

impl DeleteOutcome {
    pub fn request(&self) -> &DeleteRequest {
        match self {
            DeleteOutcome::Removed { request } | DeleteOutcome::Failed { request, .. } => request,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DeleteOutcome::Removed { .. })
    }

    /// Turn a failed delete into [`BrowserError::RemoteDelete`]
    pub fn into_result(self) -> BrowserResult<DeleteRequest> {
        match self {
            DeleteOutcome::Removed { request } => Ok(request),
            DeleteOutcome::Failed { request, error } => Err(BrowserError::RemoteDelete {
                path: request.path,
                message: error.to_string(),
            }),
        }
    }
}
