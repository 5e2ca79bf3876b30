//! Transient node-level notices shown by the host

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default auto-dismiss delay for notices raised by the core
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_millis(3000);

pub const PERMISSION_DENIED_MESSAGE: &str = "You don't have permission to delete this file.";
pub const DELETE_FAILED_MESSAGE: &str = "Delete failed.";
pub const MISSING_REVISION_MESSAGE: &str = "This file has no revision and cannot be used.";

/// Notice severity, mapped to a color by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// A message attached to a single node that disappears after a delay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(with = "millis")]
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity, dismiss_after: Duration) -> Self {
        Self {
            message: message.into(),
            severity,
            icon: None,
            dismiss_after,
        }
    }

    /// Delete attempted without edit permission
    pub fn permission_denied(dismiss_after: Duration) -> Self {
        Self::new(PERMISSION_DENIED_MESSAGE, Severity::Info, dismiss_after)
    }

    /// Remote delete rejected or unreachable
    pub fn delete_failed(dismiss_after: Duration) -> Self {
        Self::new(DELETE_FAILED_MESSAGE, Severity::Danger, dismiss_after)
    }

    /// File action invoked on a node without `fileSha`
    pub fn missing_revision(dismiss_after: Duration) -> Self {
        Self::new(MISSING_REVISION_MESSAGE, Severity::Warning, dismiss_after)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
