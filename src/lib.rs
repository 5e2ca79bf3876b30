//! branchtree - branch-aware repository file browser core
//!
//! Renders repository trees with per-node actions, carries the selected
//! branch down to lazily loaded children, and drives a confirm-then-delete
//! workflow against a storage proxy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{Browser, DeleteWorkflow, Effect, EventResult};
pub use config::Config;
pub use error::{BrowserError, BrowserResult};
pub use infrastructure::{HostModal, NodeTree, SnapshotStore, WaterButlerApi};
