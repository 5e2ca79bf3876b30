//! Storage-proxy URL builder port
//!
//! The core supplies the node and branch/ref/sha parameters; implementations
//! own the URL layout of the proxy.

use crate::domain::entities::Node;
use crate::domain::value_objects::UrlParams;
use crate::error::BrowserResult;

pub trait StorageApi {
    /// Upload target for a folder
    fn upload_url(&self, folder: &Node, params: &UrlParams) -> BrowserResult<String>;

    /// Delete target for a file
    fn delete_url(&self, file: &Node, params: &UrlParams) -> BrowserResult<String>;

    /// Download target for a file
    fn download_url(&self, file: &Node, params: &UrlParams) -> BrowserResult<String>;

    /// Metadata/listing target used by lazy-load
    fn metadata_url(&self, folder: &Node, params: &UrlParams) -> BrowserResult<String>;

    /// File view page linked from the name column
    fn file_view_url(&self, node: &Node, params: &UrlParams) -> BrowserResult<String>;
}
