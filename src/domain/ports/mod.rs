//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the core.
//! Infrastructure provides the in-memory host, the URL builder and the store.

pub mod modal;
pub mod remote_store;
pub mod storage_api;
pub mod tree_host;

pub use modal::{ControlRole, Modal, ModalContent, ModalControl};
pub use remote_store::{RemoteError, RemoteStore};
pub use storage_api::StorageApi;
pub use tree_host::TreeHost;
