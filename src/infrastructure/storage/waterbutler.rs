//! WaterButler-style storage proxy URLs
//!
//! Layout:
//! - `{base}/file?nid=..&provider=..&path=..` for upload, download and delete
//! - `{base}/data?nid=..&provider=..&path=..` for metadata listings
//! - `{nodeApiUrl}waterbutler/files/?provider=..&path=..` for the file view page
//!
//! followed by whichever of `branch`, `ref`, `sha` the caller supplied.

use serde_json::Value;
use url::Url;

use crate::domain::entities::Node;
use crate::domain::ports::StorageApi;
use crate::domain::value_objects::UrlParams;
use crate::error::BrowserResult;

#[derive(Debug, Clone)]
pub struct WaterButlerApi {
    base: Url,
    project: String,
}

impl WaterButlerApi {
    pub fn new(base_url: &str, project: impl Into<String>) -> BrowserResult<Self> {
        Ok(Self {
            base: with_trailing_slash(Url::parse(base_url)?),
            project: project.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, segment: &str, node: &Node, params: &UrlParams) -> BrowserResult<String> {
        let mut url = self.base.join(segment)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("nid", &self.project);
            query.append_pair("provider", &node.data.provider);
            query.append_pair("path", &node.data.path);
            for (key, value) in params.pairs() {
                query.append_pair(key, value);
            }
        }
        Ok(url.into())
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace `key` in place, or append it
fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key.to_string(), value)),
    }
}

impl StorageApi for WaterButlerApi {
    fn upload_url(&self, folder: &Node, params: &UrlParams) -> BrowserResult<String> {
        self.endpoint("file", folder, params)
    }

    fn delete_url(&self, file: &Node, params: &UrlParams) -> BrowserResult<String> {
        self.endpoint("file", file, params)
    }

    fn download_url(&self, file: &Node, params: &UrlParams) -> BrowserResult<String> {
        self.endpoint("file", file, params)
    }

    fn metadata_url(&self, folder: &Node, params: &UrlParams) -> BrowserResult<String> {
        self.endpoint("data", folder, params)
    }

    fn file_view_url(&self, node: &Node, params: &UrlParams) -> BrowserResult<String> {
        let page_base = match &node.data.node_api_url {
            Some(api) => with_trailing_slash(Url::parse(api)?),
            None => self.base.clone(),
        };
        let mut url = page_base.join("waterbutler/files/")?;

        let path = node.data.path.strip_prefix('/').unwrap_or(&node.data.path);
        let mut pairs = vec![
            ("provider".to_string(), node.data.provider.clone()),
            ("path".to_string(), path.to_string()),
        ];
        pairs.extend(params.pairs().into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        if let Some(sha) = &node.data.extra.file_sha {
            pairs.push(("fileSha".to_string(), sha.clone()));
        }
        for (key, value) in &node.data.extra.other {
            set_pair(&mut pairs, key, query_value(value));
        }

        url.query_pairs_mut().extend_pairs(&pairs);
        Ok(url.into())
    }
}
