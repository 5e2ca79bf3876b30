//! Delete workflow state machine
//!
//! `Idle -> ConfirmPending -> Deleting -> Idle`. The remote call between
//! `Deleting` and resolution belongs to the caller: [`DeleteWorkflow::confirm`]
//! hands out the request and [`DeleteWorkflow::complete`] resumes with its result.

use std::time::Duration;

use log::{debug, info, warn};

use crate::domain::entities::NodeId;
use crate::domain::ports::{
    ControlRole, Modal, ModalContent, ModalControl, RemoteError, StorageApi, TreeHost,
};
use crate::domain::services::effective_branch;
use crate::domain::value_objects::{DeleteRequest, Notice, UrlParams, NOTICE_DISMISS_AFTER};
use crate::error::{BrowserError, BrowserResult};

use super::state::{DeleteOutcome, DeleteState, RequestOutcome};

pub const CONFIRM_BODY: &str = "This action is irreversible.";
pub const BUSY_LABEL: &str = "Deleting...";

const CANCEL_STYLE: &str = "btn btn-default m-r-md";
const CONFIRM_STYLE: &str = "btn btn-success";

fn confirm_content(name: &str) -> ModalContent {
    ModalContent {
        title: format!("Delete \"{}\"?", name),
        body: CONFIRM_BODY.to_string(),
    }
}

fn confirm_controls(busy: bool) -> Vec<ModalControl> {
    let cancel = ModalControl::new(ControlRole::Cancel, "Cancel", CANCEL_STYLE);
    let confirm = if busy {
        ModalControl::new(ControlRole::Confirm, BUSY_LABEL, CONFIRM_STYLE).disabled()
    } else {
        ModalControl::new(ControlRole::Confirm, "OK", CONFIRM_STYLE)
    };
    vec![cancel, confirm]
}

#[derive(Debug, Clone)]
pub struct DeleteWorkflow {
    state: DeleteState,
    dismiss_after: Duration,
}

impl Default for DeleteWorkflow {
    fn default() -> Self {
        Self::new(NOTICE_DISMISS_AFTER)
    }
}

impl DeleteWorkflow {
    /// Workflow whose notices auto-dismiss after `dismiss_after`
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            state: DeleteState::Idle,
            dismiss_after,
        }
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        !self.state.is_idle()
    }

    /// Delete activated on `id`.
    ///
    /// Without edit permission a denial notice is posted and no modal opens.
    /// A file without a revision id gets a warning notice and is refused.
    pub fn request<H, M>(
        &mut self,
        host: &mut H,
        modal: &mut M,
        id: NodeId,
    ) -> BrowserResult<RequestOutcome>
    where
        H: TreeHost + ?Sized,
        M: Modal + ?Sized,
    {
        if let Some(name) = self.state.name() {
            return Err(BrowserError::DeleteInProgress {
                name: name.to_string(),
            });
        }

        let node = host.node(id).ok_or(BrowserError::NodeNotFound { id })?;
        let name = node.data.name.clone();

        if !node.can_edit() {
            debug!("delete of {} denied: no edit permission", node.data.path);
            host.notify(id, Notice::permission_denied(self.dismiss_after));
            return Ok(RequestOutcome::Denied);
        }
        if node.file_sha().is_none() {
            let path = node.data.path.clone();
            host.notify(id, Notice::missing_revision(self.dismiss_after));
            return Err(BrowserError::MissingRevision { path });
        }

        modal.update(confirm_content(&name), confirm_controls(false));
        debug!("confirming delete of {}", name);
        self.state = DeleteState::ConfirmPending { node_id: id, name };
        Ok(RequestOutcome::Confirming)
    }

    /// Cancel control pressed. Returns false if nothing was awaiting confirmation.
    pub fn cancel<M: Modal + ?Sized>(&mut self, modal: &mut M) -> bool {
        if !matches!(self.state, DeleteState::ConfirmPending { .. }) {
            return false;
        }
        modal.dismiss();
        self.state = DeleteState::Idle;
        true
    }

    /// OK control pressed: disable it and emit the remote delete request.
    pub fn confirm<H, M, S>(
        &mut self,
        host: &H,
        modal: &mut M,
        storage: &S,
    ) -> BrowserResult<DeleteRequest>
    where
        H: TreeHost + ?Sized,
        M: Modal + ?Sized,
        S: StorageApi + ?Sized,
    {
        let (node_id, name) = match &self.state {
            DeleteState::ConfirmPending { node_id, name } => (*node_id, name.clone()),
            DeleteState::Deleting { request } => {
                return Err(BrowserError::DeleteInProgress {
                    name: request.name.clone(),
                })
            }
            DeleteState::Idle => return Err(BrowserError::NoPendingDelete),
        };

        let Some(node) = host.node(node_id) else {
            modal.dismiss();
            self.state = DeleteState::Idle;
            return Err(BrowserError::NodeNotFound { id: node_id });
        };
        let sha = node
            .file_sha()
            .ok_or_else(|| BrowserError::MissingRevision {
                path: node.data.path.clone(),
            })?
            .to_string();
        let branch = effective_branch(host, node_id);

        let params = UrlParams::new()
            .branch(branch.as_deref())
            .sha(Some(&sha));
        let url = storage.delete_url(node, &params)?;

        let request = DeleteRequest {
            node_id,
            parent_id: node.parent_id,
            name: name.clone(),
            path: node.data.path.clone(),
            provider: node.data.provider.clone(),
            branch,
            sha,
            url,
        };

        modal.update(confirm_content(&name), confirm_controls(true));
        info!("deleting {} at {}", request.path, request.sha);
        self.state = DeleteState::Deleting {
            request: request.clone(),
        };
        Ok(request)
    }

    /// Resume after the remote delete finished.
    ///
    /// Success removes the node from its parent; failure keeps it and posts a
    /// single failure notice. The modal is dismissed either way.
    pub fn complete<H, M>(
        &mut self,
        host: &mut H,
        modal: &mut M,
        result: Result<(), RemoteError>,
    ) -> BrowserResult<DeleteOutcome>
    where
        H: TreeHost + ?Sized,
        M: Modal + ?Sized,
    {
        let request = match std::mem::take(&mut self.state) {
            DeleteState::Deleting { request } => request,
            other => {
                self.state = other;
                return Err(BrowserError::NoPendingDelete);
            }
        };
        modal.dismiss();

        match result {
            Ok(()) => {
                if let Some(parent_id) = request.parent_id {
                    if !host.delete_node(parent_id, request.node_id) {
                        warn!("{} already gone from the tree", request.path);
                    }
                }
                info!("deleted {}", request.path);
                Ok(DeleteOutcome::Removed { request })
            }
            Err(error) => {
                warn!("delete of {} failed: {}", request.path, error);
                if host.node(request.node_id).is_some() {
                    host.notify(request.node_id, Notice::delete_failed(self.dismiss_after));
                } else {
                    warn!("{} left the tree; failure notice dropped", request.path);
                }
                Ok(DeleteOutcome::Failed { request, error })
            }
        }
    }
}
