//! Test fixtures - repository snapshots shared by tests.

use branchtree::application::Browser;
use branchtree::domain::ports::RemoteStore;
use branchtree::domain::value_objects::Placement;
use branchtree::infrastructure::{Snapshot, SnapshotStore, WaterButlerApi};

/// Editable GitHub repository with two branches
pub const EDITABLE_REPO: &str = r#"{
  "repository": {
    "name": "octo/hello",
    "addonFullname": "GitHub",
    "defaultBranch": "main",
    "branches": ["main", "dev"],
    "permissions": {"edit": true, "view": true},
    "urls": {
      "zip": "https://github.com/octo/hello/zipball/main",
      "repo": "https://github.com/octo/hello"
    }
  },
  "refs": {
    "main": [
      {"path": "/README.md", "sha": "abc", "downloads": 3},
      {"path": "/docs/"},
      {"path": "/docs/guide.md", "sha": "g1"},
      {"path": "/notes.txt"}
    ],
    "dev": [
      {"path": "/README.md", "sha": "def"},
      {"path": "/CHANGELOG.md", "sha": "c1"}
    ]
  }
}"#;

/// Same layout, but the caller may only view
pub const READ_ONLY_REPO: &str = r#"{
  "repository": {
    "name": "octo/public",
    "addonFullname": "GitHub",
    "defaultBranch": "main",
    "branches": ["main"],
    "permissions": {"edit": false, "view": true}
  },
  "refs": {
    "main": [
      {"path": "/README.md", "sha": "abc"}
    ]
  }
}"#;

pub const STORAGE_URL: &str = "http://localhost:7777";

pub fn snapshot_store(json: &str) -> SnapshotStore {
    let snapshot: Snapshot = serde_json::from_str(json).expect("fixture snapshot should parse");
    SnapshotStore::in_memory(snapshot)
}

/// Browser seeded with the store's repository root, nothing loaded yet
pub fn browser_for(store: &SnapshotStore) -> Browser<WaterButlerApi> {
    let storage = WaterButlerApi::new(STORAGE_URL, "abc12").expect("valid storage url");
    let root = store.root().expect("fixture has a repository");
    Browser::new(root, storage, Placement::ProjectFiles)
}
