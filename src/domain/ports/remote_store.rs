//! Remote store port - the transport behind the storage proxy
//!
//! From the core's point of view every call here is a suspension point: the
//! caller issues it and resumes the workflow with its outcome.

use thiserror::Error;

use crate::domain::entities::{Node, NodeRecord};
use crate::domain::value_objects::{DeleteRequest, UrlParams};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The provider refused the operation (stale sha, protected branch, ...)
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("unknown ref '{reference}'")]
    UnknownRef { reference: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

pub trait RemoteStore {
    /// Repository-root record the tree is seeded with
    fn root(&self) -> Result<NodeRecord, RemoteError>;

    /// Children of `folder` at `params.reference`
    fn list(&self, folder: &Node, params: &UrlParams) -> Result<Vec<NodeRecord>, RemoteError>;

    fn delete(&mut self, request: &DeleteRequest) -> Result<(), RemoteError>;
}
