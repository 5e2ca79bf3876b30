//! TreeView state and action handling.
//!
//! Keeps the cursor over the browser's visible rows and turns key actions
//! into browser calls. Remote calls go straight to the store, so every
//! suspension point resumes within the same action.

use log::debug;

use branchtree::application::{Browser, Effect, EventResult};
use branchtree::domain::entities::NodeId;
use branchtree::domain::ports::{Modal, RemoteStore, StorageApi, TreeHost};
use branchtree::domain::services::ActionKind;
use branchtree::error::BrowserResult;

/// Tree view action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Expand folder (lazy-loads on first expansion)
    Expand,
    /// Collapse folder, or jump to parent
    Collapse,
    /// Toggle a folder, open a file
    Open,
    Upload,
    /// Download file, or zip for a repository root
    Download,
    OpenRepository,
    Delete,
    /// Cycle the repository root to its next branch
    NextBranch,
    /// OK in the delete modal
    Confirm,
    /// Cancel in the delete modal
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct TreeView {
    cursor: usize,
    status: Option<String>,
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Node under the cursor
    pub fn selected<S: StorageApi>(&self, browser: &Browser<S>) -> Option<NodeId> {
        browser.tree().visible().get(self.cursor).map(|v| v.id)
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Apply an action; errors become the status line
    pub fn handle_action<S, R>(
        &mut self,
        browser: &mut Browser<S>,
        store: &mut R,
        action: ViewAction,
    ) -> Flow
    where
        S: StorageApi,
        R: RemoteStore + ?Sized,
    {
        if action == ViewAction::Quit {
            return Flow::Quit;
        }

        if let Err(e) = self.apply(browser, store, action) {
            debug!("{:?} failed: {}", action, e);
            self.status = Some(e.to_string());
        }
        self.clamp(browser.tree().visible().len());
        Flow::Continue
    }

    fn apply<S, R>(
        &mut self,
        browser: &mut Browser<S>,
        store: &mut R,
        action: ViewAction,
    ) -> BrowserResult<()>
    where
        S: StorageApi,
        R: RemoteStore + ?Sized,
    {
        if browser.modal().is_open() {
            return self.apply_modal(browser, store, action);
        }

        let visible = browser.tree().visible();
        let Some(current) = visible.get(self.cursor).copied() else {
            return Ok(());
        };
        let id = current.id;
        let is_folder = browser.tree().node(id).is_some_and(|n| n.is_folder());

        match action {
            ViewAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            ViewAction::Down => {
                if self.cursor + 1 < visible.len() {
                    self.cursor += 1;
                }
            }
            ViewAction::Expand => {
                if is_folder {
                    browser.expand(id, &*store)?;
                }
            }
            ViewAction::Collapse => {
                if browser.tree().is_expanded(id) {
                    browser.tree_mut().collapse(id);
                } else if current.depth > 0 {
                    // Jump to the nearest row above with a smaller depth
                    if let Some(pos) = visible[..self.cursor]
                        .iter()
                        .rposition(|v| v.depth < current.depth)
                    {
                        self.cursor = pos;
                    }
                }
            }
            ViewAction::Open => {
                if is_folder {
                    if browser.tree().is_expanded(id) {
                        browser.tree_mut().collapse(id);
                    } else {
                        browser.expand(id, &*store)?;
                    }
                } else {
                    self.dispatch(browser, id, ActionKind::DownloadFile)?;
                }
            }
            ViewAction::Upload => self.dispatch(browser, id, ActionKind::Upload)?,
            ViewAction::Download => {
                let kind = if is_folder {
                    ActionKind::DownloadZip
                } else {
                    ActionKind::DownloadFile
                };
                self.dispatch(browser, id, kind)?;
            }
            ViewAction::OpenRepository => {
                self.dispatch(browser, id, ActionKind::OpenRepository)?
            }
            ViewAction::Delete => self.dispatch(browser, id, ActionKind::Delete)?,
            ViewAction::NextBranch => {
                let root = browser.tree().root();
                if let Some(branch) = browser.cycle_branch(root)? {
                    browser.expand(root, &*store)?;
                    self.cursor = 0;
                    self.status = Some(format!("Switched to branch '{}'", branch));
                }
            }
            ViewAction::Confirm | ViewAction::Cancel | ViewAction::Quit => {}
        }
        Ok(())
    }

    fn apply_modal<S, R>(
        &mut self,
        browser: &mut Browser<S>,
        store: &mut R,
        action: ViewAction,
    ) -> BrowserResult<()>
    where
        S: StorageApi,
        R: RemoteStore + ?Sized,
    {
        match action {
            ViewAction::Confirm => {
                let request = browser.confirm_delete()?;
                let result = store.delete(&request);
                let outcome = browser.complete_delete(result)?;
                self.status = Some(if outcome.is_removed() {
                    format!("Deleted {}", outcome.request().name)
                } else {
                    format!("Could not delete {}", outcome.request().name)
                });
            }
            ViewAction::Cancel => {
                browser.cancel_delete();
                self.status = None;
            }
            _ => {}
        }
        Ok(())
    }

    fn dispatch<S: StorageApi>(
        &mut self,
        browser: &mut Browser<S>,
        id: NodeId,
        kind: ActionKind,
    ) -> BrowserResult<()> {
        self.status = match browser.activate(id, kind)? {
            EventResult::Handled(Effect::Navigate { url }) => Some(format!("Open {}", url)),
            EventResult::Handled(Effect::Upload { url }) => Some(format!("Upload to {}", url)),
            EventResult::Handled(Effect::ConfirmDelete { .. })
            | EventResult::Handled(Effect::Notified { .. }) => None,
            EventResult::Ignored => None,
        };
        Ok(())
    }
}
