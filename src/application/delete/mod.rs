//! Delete Workflow
//!
//! Drives a file delete from activation to resolution:
//! - Guarding on edit permission and revision id
//! - Opening the confirmation modal
//! - Emitting the remote delete request on confirm
//! - Reconciling the tree once the remote call completes

mod state;
mod workflow;

pub use state::{DeleteOutcome, DeleteState, RequestOutcome};
pub use workflow::{DeleteWorkflow, BUSY_LABEL, CONFIRM_BODY};
