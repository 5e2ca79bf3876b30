//! Domain Services
//!
//! Stateless logic over nodes: branch propagation, action resolution,
//! branch selection and row description.

mod action_resolver;
mod branch_propagator;
mod branch_selector;
mod row_builder;

pub use action_resolver::{resolve_actions, ActionDescriptor, ActionKind};
pub use branch_propagator::{
    effective_branch, inherit_branch, propagate_branch, stamp_upload_response,
};
pub use branch_selector::{
    adopt_default_branch, branch_selector, select_branch, BranchOption, BranchSelector,
};
pub use row_builder::{
    build_row, column_specs, title_cell, Cell, ColumnKind, ColumnSpec, RowDescriptor, TitleCell,
};
