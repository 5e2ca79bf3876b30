//! Scenario: Switching a repository to another branch
//!
//! Journey: A contributor looks at `main`, switches the repository root to
//! `dev`, and works with files there.
//!
//! Success Criteria:
//! - The selector reflects the current branch
//! - Switching drops the cached subtree and re-fetches it at the new ref
//! - Every URL built afterwards carries the new branch

use branchtree::domain::entities::{NodeData, NodeRecord};
use branchtree::domain::ports::TreeHost;
use branchtree::domain::services::{ActionKind, TitleCell};
use branchtree::BrowserError;

use crate::common::*;

fn selected_branches(
    browser: &branchtree::Browser<branchtree::WaterButlerApi>,
) -> Vec<(String, bool)> {
    let root = browser.tree().root();
    match browser.row(root).and_then(|r| r.title().cloned()) {
        Some(TitleCell::Repository {
            selector: Some(selector),
            ..
        }) => selector
            .options
            .into_iter()
            .map(|o| (o.name, o.selected))
            .collect(),
        other => panic!("expected a repository title, got {:?}", other),
    }
}

/// SCENARIO: selector shows main, switching to dev re-fetches the subtree
#[test]
fn scenario_switch_to_dev_refetches_subtree() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    let root = browser.tree().root();
    browser.expand(root, &store).unwrap();

    assert_eq!(
        selected_branches(&browser),
        vec![("main".to_string(), true), ("dev".to_string(), false)]
    );
    assert_eq!(browser.tree().children(root).len(), 3);

    // Switch: node.branch changes and cached children are dropped
    assert!(browser.select_branch(root, "dev").unwrap());
    assert_eq!(
        browser.tree().node(root).unwrap().data.branch.as_deref(),
        Some("dev")
    );
    assert!(browser.tree().children(root).is_empty());
    assert!(browser.tree().needs_fetch(root));
    assert!(browser.lazy_load_url(root).unwrap().ends_with("&ref=dev"));

    // Re-fetch at the new ref
    let fetched = browser.expand(root, &store).unwrap();
    assert_eq!(fetched, 2);
    assert!(browser.tree().find_by_path("/CHANGELOG.md").is_some());
    assert_eq!(
        selected_branches(&browser),
        vec![("main".to_string(), false), ("dev".to_string(), true)]
    );

    // Children carry the new branch into their delete URL
    let readme = browser.tree().find_by_path("/README.md").unwrap();
    assert_eq!(
        browser.tree().node(readme).unwrap().data.branch.as_deref(),
        Some("dev")
    );
    browser.activate(readme, ActionKind::Delete).unwrap();
    let request = browser.confirm_delete().unwrap();
    assert_eq!(request.branch.as_deref(), Some("dev"));
    assert!(request.url.contains("branch=dev&sha=def"), "{}", request.url);
}

/// SCENARIO: selecting the current branch or an unknown one changes nothing
#[test]
fn scenario_noop_and_unknown_branch_selection() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    let root = browser.tree().root();
    browser.expand(root, &store).unwrap();

    assert!(!browser.select_branch(root, "main").unwrap());
    assert_eq!(browser.tree().children(root).len(), 3);

    let err = browser.select_branch(root, "release").unwrap_err();
    assert!(matches!(err, BrowserError::UnknownBranch { .. }));
    assert_eq!(browser.tree().children(root).len(), 3);
}

/// SCENARIO: uploads land on the folder's branch
#[test]
fn scenario_upload_into_nested_folder_uses_branch() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();
    let docs = browser.tree().find_by_path("/docs/").unwrap();

    let url = browser.upload_url(docs).unwrap();
    assert!(url.contains("path=%2Fdocs%2F"), "{}", url);
    assert!(url.ends_with("&branch=main"), "{}", url);

    let uploaded = browser
        .on_upload_success(
            docs,
            NodeRecord::file(NodeData::new("new.md", "/docs/new.md").with_sha("n1")),
        )
        .unwrap();
    assert_eq!(
        browser.tree().node(uploaded).unwrap().data.branch.as_deref(),
        Some("main")
    );
    assert!(browser.tree().children(docs).contains(&uploaded));
}

/// SCENARIO: cycling walks the branch list and wraps
#[test]
fn scenario_cycle_branch_wraps_around() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    let root = browser.tree().root();

    assert_eq!(browser.cycle_branch(root).unwrap().as_deref(), Some("dev"));
    assert_eq!(browser.cycle_branch(root).unwrap().as_deref(), Some("main"));
}
