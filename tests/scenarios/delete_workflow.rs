//! Scenario: Deleting a file from the tree
//!
//! Journey: A contributor browses a repository and deletes a file.
//!
//! Steps:
//! 1. Expand the repository
//! 2. Activate the delete control on a file
//! 3. Confirm or cancel in the modal
//! 4. The remote outcome is fed back into the workflow
//!
//! Success Criteria:
//! - Nothing reaches the remote store without confirmation
//! - The tree always matches the remote outcome
//! - Failures leave one transient notice and an interactive tree

use std::time::Instant;

use branchtree::application::{DeleteState, Effect, EventResult};
use branchtree::domain::ports::{ControlRole, Modal, RemoteError, RemoteStore, TreeHost};
use branchtree::domain::services::ActionKind;
use branchtree::domain::value_objects::{
    Severity, DELETE_FAILED_MESSAGE, MISSING_REVISION_MESSAGE, PERMISSION_DENIED_MESSAGE,
};
use branchtree::BrowserError;

use crate::common::*;

/// SCENARIO: editable file with a revision id is confirmed and removed
#[test]
fn scenario_confirmed_delete_targets_branch_and_sha() {
    let mut store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();

    let root = browser.tree().root();
    let readme = browser.tree().find_by_path("/README.md").unwrap();

    // Step 2: activation opens the modal
    let result = browser.activate(readme, ActionKind::Delete).unwrap();
    assert_eq!(
        result,
        EventResult::Handled(Effect::ConfirmDelete { node_id: readme })
    );
    let view = browser.modal().view().unwrap();
    assert_eq!(view.content.title, "Delete \"README.md\"?");
    assert_eq!(view.content.body, "This action is irreversible.");

    // Step 3: OK issues the delete request with branch and sha
    let request = browser.confirm_delete().unwrap();
    assert!(request.url.starts_with(&format!("{}/file?", STORAGE_URL)));
    assert!(request.url.contains("branch=main"), "{}", request.url);
    assert!(request.url.contains("sha=abc"), "{}", request.url);
    assert!(browser.modal().control(ControlRole::Confirm).unwrap().disabled);

    // Step 4: success removes the node and closes the modal
    let result = store.delete(&request);
    let outcome = browser.complete_delete(result).unwrap();

    assert!(outcome.is_removed());
    assert!(!browser.tree().children(root).contains(&readme));
    assert!(browser.tree().node(readme).is_none());
    assert!(!browser.modal().is_open());
    assert!(browser.delete_state().is_idle());
    assert!(store.snapshot().refs["main"]
        .iter()
        .all(|e| e.path != "/README.md"));
}

/// SCENARIO: read-only caller gets a denial notice instead of a modal
#[test]
fn scenario_read_only_delete_is_denied_with_notice() {
    let store = snapshot_store(READ_ONLY_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();
    let readme = browser.tree().find_by_path("/README.md").unwrap();

    let result = browser.activate(readme, ActionKind::Delete).unwrap();

    assert_eq!(result, EventResult::Handled(Effect::Notified { node_id: readme }));
    assert!(!browser.modal().is_open());
    let notice = browser.tree().notice(readme, Instant::now()).unwrap();
    assert_eq!(notice.message, PERMISSION_DENIED_MESSAGE);
    assert_eq!(notice.severity, Severity::Info);
    assert!(browser.delete_state().is_idle());
}

/// SCENARIO: cancel never reaches the store and leaves the node untouched
#[test]
fn scenario_cancel_leaves_everything_as_it_was() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();
    let guide = browser.tree().find_by_path("/docs/guide.md").unwrap();
    let before = browser.tree().node(guide).unwrap().clone();

    browser.activate(guide, ActionKind::Delete).unwrap();
    assert!(browser.cancel_delete());

    assert!(!browser.modal().is_open());
    assert_eq!(browser.delete_state(), &DeleteState::Idle);
    assert_eq!(browser.tree().node(guide), Some(&before));
    assert!(matches!(
        browser.confirm_delete(),
        Err(BrowserError::NoPendingDelete)
    ));
    assert_eq!(store.snapshot().refs["main"].len(), 4);
}

/// SCENARIO: remote rejection keeps the node and shows exactly one notice
#[test]
fn scenario_failed_delete_keeps_node_with_single_notice() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();
    let readme = browser.tree().find_by_path("/README.md").unwrap();

    browser.activate(readme, ActionKind::Delete).unwrap();
    browser.confirm_delete().unwrap();
    let outcome = browser
        .complete_delete(Err(RemoteError::Rejected {
            status: 409,
            message: "sha mismatch".to_string(),
        }))
        .unwrap();

    assert!(!outcome.is_removed());
    assert!(browser.tree().node(readme).is_some());
    assert!(!browser.modal().is_open());

    let now = Instant::now();
    assert_eq!(browser.tree().notice_count(now), 1);
    let notice = browser.tree().notice(readme, now).unwrap();
    assert_eq!(notice.message, DELETE_FAILED_MESSAGE);
    assert_eq!(notice.severity, Severity::Danger);

    assert!(matches!(
        outcome.into_result(),
        Err(BrowserError::RemoteDelete { .. })
    ));

    // The tree stays usable: the same file can be deleted again
    assert!(browser
        .activate(readme, ActionKind::Delete)
        .unwrap()
        .is_handled());
}

/// SCENARIO: a file without a revision id never opens the modal
#[test]
fn scenario_missing_revision_is_refused_up_front() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();
    let notes = browser.tree().find_by_path("/notes.txt").unwrap();

    let err = browser.activate(notes, ActionKind::Delete).unwrap_err();

    assert!(matches!(err, BrowserError::MissingRevision { .. }));
    assert!(!browser.modal().is_open());
    let notice = browser.tree().notice(notes, Instant::now()).unwrap();
    assert_eq!(notice.message, MISSING_REVISION_MESSAGE);

    let download = browser.activate(notes, ActionKind::DownloadFile);
    assert!(matches!(download, Err(BrowserError::MissingRevision { .. })));
}

/// SCENARIO: a second delete while one is pending is refused
#[test]
fn scenario_second_delete_does_not_steal_the_modal() {
    let store = snapshot_store(EDITABLE_REPO);
    let mut browser = browser_for(&store);
    browser.expand_all(&store).unwrap();
    let readme = browser.tree().find_by_path("/README.md").unwrap();
    let guide = browser.tree().find_by_path("/docs/guide.md").unwrap();

    browser.activate(readme, ActionKind::Delete).unwrap();
    let err = browser.activate(guide, ActionKind::Delete).unwrap_err();

    assert!(matches!(err, BrowserError::DeleteInProgress { .. }));
    assert_eq!(
        browser.modal().view().unwrap().content.title,
        "Delete \"README.md\"?"
    );
    assert_eq!(browser.delete_state().node_id(), Some(readme));
}
