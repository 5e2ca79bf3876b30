//! Tree-view host implementations

mod memory;
mod modal;

pub use memory::{NodeTree, VisibleNode};
pub use modal::{HostModal, ModalView};
