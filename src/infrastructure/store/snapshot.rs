//! Repository snapshot store
//!
//! Serves lazy-load listings and deletes from a JSON snapshot of a repository:
//!
//! ```json
//! {
//!   "repository": { "name": "octo/hello", "addonFullname": "GitHub",
//!                   "defaultBranch": "main", "branches": ["main", "dev"],
//!                   "permissions": { "edit": true } },
//!   "refs": {
//!     "main": [ { "path": "/src/" }, { "path": "/src/lib.rs", "sha": "abc" } ]
//!   }
//! }
//! ```
//!
//! Paths ending in `/` are folders. Writes go through a temp file and an
//! exclusive lock next to the snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Node, NodeData, NodeKind, NodeRecord};
use crate::domain::ports::{RemoteError, RemoteStore};
use crate::domain::value_objects::{DeleteRequest, UrlParams};
use crate::error::{BrowserError, BrowserResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
}

impl SnapshotEntry {
    pub fn is_folder(&self) -> bool {
        self.path.ends_with('/')
    }

    pub fn name(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }

    /// Path of the containing folder, always ending in `/`
    pub fn parent_path(&self) -> &str {
        parent_path(&self.path)
    }
}

fn parent_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[..=idx],
        None => "/",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub repository: NodeData,
    #[serde(default)]
    pub refs: BTreeMap<String, Vec<SnapshotEntry>>,
}

impl Snapshot {
    fn resolve_ref<'a>(&'a self, reference: Option<&'a str>) -> Option<&'a str> {
        reference.or(self.repository.default_branch.as_deref())
    }

    /// Drop the entry `request` targets; returns the ref it was removed from
    fn remove_entry(&mut self, request: &DeleteRequest) -> Result<String, RemoteError> {
        if !self.repository.permissions.edit {
            return Err(RemoteError::Rejected {
                status: 403,
                message: "repository is read-only".to_string(),
            });
        }

        let reference = self
            .resolve_ref(request.branch.as_deref())
            .map(str::to_string)
            .ok_or_else(|| RemoteError::UnknownRef {
                reference: String::new(),
            })?;
        let entries = self
            .refs
            .get_mut(&reference)
            .ok_or_else(|| RemoteError::UnknownRef {
                reference: reference.clone(),
            })?;

        let idx = entries
            .iter()
            .position(|e| e.path == request.path)
            .ok_or_else(|| RemoteError::NotFound {
                path: request.path.clone(),
            })?;
        if entries[idx].sha.as_deref() != Some(request.sha.as_str()) {
            return Err(RemoteError::Rejected {
                status: 409,
                message: format!("{} does not match sha {}", request.path, request.sha),
            });
        }

        entries.remove(idx);
        Ok(reference)
    }
}

fn read_snapshot(path: &Path) -> io::Result<Snapshot> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_atomic(path: &Path, snapshot: &Snapshot) -> Result<(), RemoteError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let content = serde_json::to_string_pretty(snapshot).map_err(unavailable)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(unavailable)?;
    tmp.write_all(content.as_bytes()).map_err(unavailable)?;
    tmp.persist(path).map_err(|e| unavailable(e.error))?;
    Ok(())
}

fn unavailable(e: impl std::fmt::Display) -> RemoteError {
    RemoteError::Unavailable {
        message: e.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshot: Snapshot,
    path: Option<PathBuf>,
}

impl SnapshotStore {
    /// Load a snapshot file; deletes are written back to it
    pub fn open(path: &Path) -> BrowserResult<Self> {
        let snapshot = read_snapshot(path).map_err(|e| BrowserError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(
            "loaded snapshot {} with {} refs",
            path.display(),
            snapshot.refs.len()
        );
        Ok(Self {
            snapshot,
            path: Some(path.to_path_buf()),
        })
    }

    /// Serve a snapshot from memory only
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            path: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn record_for(&self, entry: &SnapshotEntry) -> NodeRecord {
        let repo = &self.snapshot.repository;
        let mut data = NodeData::new(entry.name(), entry.path.clone())
            .with_permissions(repo.permissions);
        data.provider = repo.provider.clone();
        data.node_api_url = repo.node_api_url.clone();
        data.extra.file_sha = entry.sha.clone();
        data.downloads = entry.downloads;

        NodeRecord {
            kind: if entry.is_folder() {
                NodeKind::Folder
            } else {
                NodeKind::File
            },
            data,
        }
    }

    /// Reload the file and apply the delete to it, all under the lock.
    /// The in-memory copy only changes once the write has landed.
    fn delete_in_file(
        &mut self,
        path: &Path,
        request: &DeleteRequest,
    ) -> Result<String, RemoteError> {
        let lock_file = fs::File::create(path.with_extension("lock")).map_err(unavailable)?;
        lock_file.lock_exclusive().map_err(unavailable)?;

        let result = read_snapshot(path).map_err(unavailable).and_then(|mut current| {
            let reference = current.remove_entry(request)?;
            write_atomic(path, &current)?;
            self.snapshot = current;
            Ok(reference)
        });

        let _ = lock_file.unlock();
        result
    }
}

impl RemoteStore for SnapshotStore {
    fn root(&self) -> Result<NodeRecord, RemoteError> {
        let mut data = self.snapshot.repository.clone();
        if data.path.is_empty() {
            data.path = "/".to_string();
        }
        Ok(NodeRecord::folder(data))
    }

    fn list(&self, folder: &Node, params: &UrlParams) -> Result<Vec<NodeRecord>, RemoteError> {
        if !self.snapshot.repository.permissions.view {
            return Err(RemoteError::Rejected {
                status: 403,
                message: "repository is not viewable".to_string(),
            });
        }

        let reference = self
            .snapshot
            .resolve_ref(params.reference.as_deref())
            .ok_or_else(|| RemoteError::UnknownRef {
                reference: String::new(),
            })?;
        let entries = self
            .snapshot
            .refs
            .get(reference)
            .ok_or_else(|| RemoteError::UnknownRef {
                reference: reference.to_string(),
            })?;

        Ok(entries
            .iter()
            .filter(|e| e.parent_path() == folder.data.path && e.path != folder.data.path)
            .map(|e| self.record_for(e))
            .collect())
    }

    fn delete(&mut self, request: &DeleteRequest) -> Result<(), RemoteError> {
        let reference = match self.path.clone() {
            Some(path) => self.delete_in_file(&path, request)?,
            None => {
                let mut next = self.snapshot.clone();
                let reference = next.remove_entry(request)?;
                self.snapshot = next;
                reference
            }
        };
        info!("deleted {} on {}", request.path, reference);
        Ok(())
    }
}
