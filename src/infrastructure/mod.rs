//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `tree/` - In-memory tree host and modal
//! - `storage/` - Storage proxy URL builder
//! - `store/` - Snapshot-backed remote store

pub mod storage;
pub mod store;
pub mod tree;

pub use storage::WaterButlerApi;
pub use store::{Snapshot, SnapshotEntry, SnapshotStore};
pub use tree::{HostModal, ModalView, NodeTree, VisibleNode};
