//! Remote stores backing lazy loads and deletes

mod snapshot;

pub use snapshot::{Snapshot, SnapshotEntry, SnapshotStore};
