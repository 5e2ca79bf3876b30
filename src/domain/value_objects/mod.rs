//! Domain Value Objects
//!
//! Immutable value types shared by the services and ports.

mod delete_request;
mod notice;
mod placement;
mod url_params;

pub use delete_request::DeleteRequest;
pub use notice::{
    Notice, Severity, DELETE_FAILED_MESSAGE, MISSING_REVISION_MESSAGE, NOTICE_DISMISS_AFTER,
    PERMISSION_DENIED_MESSAGE,
};
pub use placement::Placement;
pub use url_params::UrlParams;
