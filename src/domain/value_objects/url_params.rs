//! Parameters the core supplies to storage URL builders

/// `{branch}`, `{ref}` and `{sha}` parameters of a storage-proxy URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub branch: Option<String>,
    pub reference: Option<String>,
    pub sha: Option<String>,
}

impl UrlParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch(mut self, branch: Option<&str>) -> Self {
        self.branch = branch.map(str::to_string);
        self
    }

    pub fn reference(mut self, reference: Option<&str>) -> Self {
        self.reference = reference.map(str::to_string);
        self
    }

    pub fn sha(mut self, sha: Option<&str>) -> Self {
        self.sha = sha.map(str::to_string);
        self
    }

    /// Non-empty parameters in `branch`, `ref`, `sha` order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(branch) = &self.branch {
            pairs.push(("branch", branch.as_str()));
        }
        if let Some(reference) = &self.reference {
            pairs.push(("ref", reference.as_str()));
        }
        if let Some(sha) = &self.sha {
            pairs.push(("sha", sha.as_str()));
        }
        pairs
    }
}
