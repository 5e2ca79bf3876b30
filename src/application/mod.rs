//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates the tree host, modal and storage collaborators
//!
//! ## Use Cases
//!
//! - `DeleteWorkflow` - Confirm-then-delete state machine for a file node
//! - `Browser` - Row-action dispatcher, lazy-load and upload continuations

pub mod browser;
pub mod delete;

pub use browser::{Browser, Effect, EventResult};
pub use delete::{DeleteOutcome, DeleteState, DeleteWorkflow, RequestOutcome};
