//! Error types for branchtree
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::NodeId;
use crate::domain::ports::RemoteError;

/// Result type alias for branchtree operations
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Main error type for browser operations
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Delete attempted without edit permission
    #[error("you don't have permission to delete '{name}'")]
    PermissionDenied { name: String },

    /// File node lacks the provider revision id needed for delete/download
    #[error("file '{path}' has no revision identifier")]
    MissingRevision { path: String },

    /// The storage proxy rejected the delete or could not be reached
    #[error("delete of '{path}' failed: {message}")]
    RemoteDelete { path: String, message: String },

    /// No node with this id exists in the tree
    #[error("node {id} not found")]
    NodeNotFound { id: NodeId },

    /// Branch selection requested on a node that is not a repository root
    #[error("'{name}' is not a repository root")]
    NotRepositoryRoot { name: String },

    /// Branch not offered by the repository root
    #[error("unknown branch '{branch}' (available: {})", available.join(", "))]
    UnknownBranch {
        branch: String,
        available: Vec<String>,
    },

    /// Another delete confirmation already owns the modal
    #[error("a delete of '{name}' is already in progress")]
    DeleteInProgress { name: String },

    /// Confirm/cancel/complete called while no delete is pending
    #[error("no delete is pending")]
    NoPendingDelete,

    /// Lazy-load listing failed
    #[error("remote store: {0}")]
    Remote(#[from] RemoteError),

    /// Storage URL could not be built
    #[error("invalid storage url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Repository snapshot could not be read or written
    #[error("snapshot {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
