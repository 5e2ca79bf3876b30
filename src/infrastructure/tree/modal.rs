//! Single modal instance owned by the host

use crate::domain::ports::{ControlRole, Modal, ModalContent, ModalControl};

/// What the modal currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub content: ModalContent,
    pub controls: Vec<ModalControl>,
}

#[derive(Debug, Clone, Default)]
pub struct HostModal {
    view: Option<ModalView>,
    updates: usize,
}

impl HostModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    pub fn control(&self, role: ControlRole) -> Option<&ModalControl> {
        self.view
            .as_ref()
            .and_then(|v| v.controls.iter().find(|c| c.role == role))
    }

    /// How many times content was pushed into the modal
    pub fn update_count(&self) -> usize {
        self.updates
    }
}

impl Modal for HostModal {
    fn update(&mut self, content: ModalContent, controls: Vec<ModalControl>) {
        self.updates += 1;
        self.view = Some(ModalView { content, controls });
    }

    fn dismiss(&mut self) {
        self.view = None;
    }

    fn is_open(&self) -> bool {
        self.view.is_some()
    }
}
