//! Modal dialog port
//!
//! A single modal instance is owned by the host and lent to whichever
//! workflow currently needs it.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlRole {
    Cancel,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalControl {
    pub role: ControlRole,
    pub label: String,
    pub style: &'static str,
    pub disabled: bool,
}

impl ModalControl {
    pub fn new(role: ControlRole, label: impl Into<String>, style: &'static str) -> Self {
        Self {
            role,
            label: label.into(),
            style,
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

pub trait Modal {
    /// Replace the modal's content and controls, opening it if closed
    fn update(&mut self, content: ModalContent, controls: Vec<ModalControl>);

    fn dismiss(&mut self);

    fn is_open(&self) -> bool;
}
