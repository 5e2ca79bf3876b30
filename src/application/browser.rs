//! Row-action dispatcher
//!
//! Owns the tree host, the single modal, the storage URL builder and the
//! delete workflow. Every activation returns an explicit [`EventResult`];
//! `Ignored` means generic row handling (expand, select) should run instead.
//!
//! Remote calls are split into a request and a completion: `lazy_load_url` /
//! `on_lazy_load` for listings, `confirm_delete` / `complete_delete` for
//! deletes. [`Browser::expand`] runs both halves against a [`RemoteStore`].

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;

use crate::domain::entities::{NodeId, NodeRecord};
use crate::domain::ports::{RemoteError, RemoteStore, StorageApi, TreeHost};
use crate::domain::services::{
    adopt_default_branch, branch_selector, build_row, effective_branch, propagate_branch,
    resolve_actions, stamp_upload_response, ActionKind, RowDescriptor,
};
use crate::domain::value_objects::{
    DeleteRequest, Notice, Placement, UrlParams, NOTICE_DISMISS_AFTER,
};
use crate::error::{BrowserError, BrowserResult};
use crate::infrastructure::tree::{HostModal, NodeTree};

use super::delete::{DeleteOutcome, DeleteState, DeleteWorkflow, RequestOutcome};

/// What the host should do after a handled activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Effect {
    /// Open a URL (downloads, external repository)
    Navigate { url: String },
    /// Open the upload dialog targeting this URL
    Upload { url: String },
    /// Delete confirmation modal is open
    ConfirmDelete { node_id: NodeId },
    /// A notice was posted on the node instead of acting
    Notified { node_id: NodeId },
}

/// Result of a row activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventResult {
    Handled(Effect),
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled(_))
    }
}

pub struct Browser<S: StorageApi> {
    tree: NodeTree,
    modal: HostModal,
    storage: S,
    workflow: DeleteWorkflow,
    placement: Placement,
    dismiss_after: Duration,
}

impl<S: StorageApi> Browser<S> {
    /// Browser seeded with a repository root
    pub fn new(root: NodeRecord, storage: S, placement: Placement) -> Self {
        let mut tree = NodeTree::new(root);
        let root_id = tree.root();
        if let Some(node) = tree.node_mut(root_id) {
            adopt_default_branch(node);
        }

        Self {
            tree,
            modal: HostModal::new(),
            storage,
            workflow: DeleteWorkflow::new(NOTICE_DISMISS_AFTER),
            placement,
            dismiss_after: NOTICE_DISMISS_AFTER,
        }
    }

    /// Auto-dismiss delay for notices posted from here on
    pub fn with_notice_delay(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self.workflow = DeleteWorkflow::new(dismiss_after);
        self
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut NodeTree {
        &mut self.tree
    }

    pub fn modal(&self) -> &HostModal {
        &self.modal
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn delete_state(&self) -> &DeleteState {
        self.workflow.state()
    }

    /// Row descriptors for every visible node, in display order
    pub fn rows(&self) -> Vec<RowDescriptor> {
        self.tree
            .visible()
            .into_iter()
            .filter_map(|v| self.row(v.id))
            .collect()
    }

    pub fn row(&self, id: NodeId) -> Option<RowDescriptor> {
        let node = self.tree.node(id)?;
        let branch = effective_branch(&self.tree, id);
        Some(build_row(
            node,
            self.placement,
            &self.storage,
            branch.as_deref(),
        ))
    }

    /// Listing parameters for a folder's lazy-load: `ref` is its effective branch
    pub fn lazy_load_params(&self, id: NodeId) -> BrowserResult<UrlParams> {
        self.tree.node(id).ok_or(BrowserError::NodeNotFound { id })?;
        let branch = effective_branch(&self.tree, id);
        Ok(UrlParams::new().reference(branch.as_deref()))
    }

    /// Metadata target the host fetches to expand `id`
    pub fn lazy_load_url(&self, id: NodeId) -> BrowserResult<String> {
        let params = self.lazy_load_params(id)?;
        let node = self.tree.node(id).ok_or(BrowserError::NodeNotFound { id })?;
        self.storage.metadata_url(node, &params)
    }

    /// Lazy-load completion: materialize `records` under `id` and hand them the
    /// folder's branch context.
    pub fn on_lazy_load(
        &mut self,
        id: NodeId,
        records: Vec<NodeRecord>,
    ) -> BrowserResult<Vec<NodeId>> {
        if self.tree.node(id).is_none() {
            return Err(BrowserError::NodeNotFound { id });
        }

        let children = self.tree.attach_children(id, records);
        for &child in &children {
            if let Some(node) = self.tree.node_mut(child) {
                adopt_default_branch(node);
            }
        }
        propagate_branch(&mut self.tree, id, &children);
        debug!("lazy-loaded {} children under {}", children.len(), id);
        Ok(children)
    }

    /// Expand a folder, lazy-loading it from `store` first if needed.
    /// Returns how many children were fetched.
    pub fn expand<R: RemoteStore + ?Sized>(
        &mut self,
        id: NodeId,
        store: &R,
    ) -> BrowserResult<usize> {
        let mut fetched = 0;
        if self.tree.needs_fetch(id) {
            let params = self.lazy_load_params(id)?;
            let node = self.tree.node(id).ok_or(BrowserError::NodeNotFound { id })?;
            let records = store.list(node, &params)?;
            fetched = self.on_lazy_load(id, records)?.len();
        }
        self.tree.expand(id);
        Ok(fetched)
    }

    /// Lazy-load every folder reachable from the root and expand it
    pub fn expand_all<R: RemoteStore + ?Sized>(&mut self, store: &R) -> BrowserResult<usize> {
        let mut pending = vec![self.tree.root()];
        let mut fetched = 0;
        while let Some(id) = pending.pop() {
            fetched += self.expand(id, store)?;
            pending.extend(
                self.tree
                    .children(id)
                    .into_iter()
                    .filter(|&c| self.tree.node(c).is_some_and(|n| n.is_folder())),
            );
        }
        Ok(fetched)
    }

    /// Dispatch a row action
    pub fn activate(&mut self, id: NodeId, kind: ActionKind) -> BrowserResult<EventResult> {
        let node = self.tree.node(id).ok_or(BrowserError::NodeNotFound { id })?;

        if kind == ActionKind::Delete {
            if node.is_folder() {
                return Ok(EventResult::Ignored);
            }
            return match self.workflow.request(&mut self.tree, &mut self.modal, id)? {
                RequestOutcome::Confirming => {
                    Ok(EventResult::Handled(Effect::ConfirmDelete { node_id: id }))
                }
                RequestOutcome::Denied => {
                    Ok(EventResult::Handled(Effect::Notified { node_id: id }))
                }
            };
        }

        let Some(action) = resolve_actions(node, node.data.permissions)
            .into_iter()
            .find(|a| a.kind == kind)
        else {
            return Ok(EventResult::Ignored);
        };

        if !action.enabled {
            let path = node.data.path.clone();
            self.tree.notify(id, Notice::missing_revision(self.dismiss_after));
            return Err(BrowserError::MissingRevision { path });
        }

        let effect = match kind {
            ActionKind::Upload => Effect::Upload {
                url: self.upload_url(id)?,
            },
            ActionKind::DownloadZip => match &node.data.urls.zip {
                Some(url) => Effect::Navigate { url: url.clone() },
                None => return Ok(EventResult::Ignored),
            },
            ActionKind::OpenRepository => match &node.data.urls.repo {
                Some(url) => Effect::Navigate { url: url.clone() },
                None => return Ok(EventResult::Ignored),
            },
            ActionKind::DownloadFile => {
                let params = UrlParams::new().reference(node.file_sha());
                Effect::Navigate {
                    url: self.storage.download_url(node, &params)?,
                }
            }
            ActionKind::Delete => return Ok(EventResult::Ignored),
        };

        Ok(EventResult::Handled(effect))
    }

    /// OK pressed in the delete modal; the caller issues the returned request
    pub fn confirm_delete(&mut self) -> BrowserResult<DeleteRequest> {
        self.workflow.confirm(&self.tree, &mut self.modal, &self.storage)
    }

    /// Cancel pressed in the delete modal
    pub fn cancel_delete(&mut self) -> bool {
        self.workflow.cancel(&mut self.modal)
    }

    /// Resume the delete workflow with the remote outcome
    pub fn complete_delete(
        &mut self,
        result: Result<(), RemoteError>,
    ) -> BrowserResult<DeleteOutcome> {
        self.workflow.complete(&mut self.tree, &mut self.modal, result)
    }

    /// Switch a repository root's branch; its subtree is dropped for re-fetch
    pub fn select_branch(&mut self, id: NodeId, branch: &str) -> BrowserResult<bool> {
        crate::domain::services::select_branch(&mut self.tree, id, branch)
    }

    /// Select the branch after the current one on a repository root
    pub fn cycle_branch(&mut self, id: NodeId) -> BrowserResult<Option<String>> {
        let node = self.tree.node(id).ok_or(BrowserError::NodeNotFound { id })?;
        let Some(next) = branch_selector(node).and_then(|s| s.next().map(str::to_string)) else {
            return Ok(None);
        };
        self.select_branch(id, &next)?;
        Ok(Some(next))
    }

    /// Upload target for a folder, carrying the folder's effective branch
    pub fn upload_url(&self, folder_id: NodeId) -> BrowserResult<String> {
        let folder = self
            .tree
            .node(folder_id)
            .ok_or(BrowserError::NodeNotFound { id: folder_id })?;
        let branch = effective_branch(&self.tree, folder_id);
        self.storage.upload_url(folder, &UrlParams::new().branch(branch.as_deref()))
    }

    /// Upload completion: the new node takes the folder's branch
    pub fn on_upload_success(
        &mut self,
        folder_id: NodeId,
        mut record: NodeRecord,
    ) -> BrowserResult<NodeId> {
        if self.tree.node(folder_id).is_none() {
            return Err(BrowserError::NodeNotFound { id: folder_id });
        }
        let branch = effective_branch(&self.tree, folder_id);
        stamp_upload_response(branch.as_deref(), &mut record);

        let name = record.data.name.clone();
        let ids = self.tree.attach_children(folder_id, vec![record]);
        let id = ids
            .first()
            .copied()
            .ok_or(BrowserError::NodeNotFound { id: folder_id })?;
        info!("uploaded {} into {}", name, folder_id);
        Ok(id)
    }

    /// Drop notices that have auto-dismissed
    pub fn expire_notices(&mut self, now: Instant) -> usize {
        self.tree.expire_notices(now)
    }
}
