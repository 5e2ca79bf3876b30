//! Property tests for row action resolution.

use proptest::prelude::*;

use branchtree::domain::entities::{Node, NodeData, NodeId, NodeRecord, Permissions};
use branchtree::domain::services::{resolve_actions, ActionKind};

fn permissions() -> impl Strategy<Value = Permissions> {
    (any::<bool>(), any::<bool>()).prop_map(|(edit, view)| Permissions { edit, view })
}

fn sha() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[0-9a-f]{1,40}")
}

fn folder(repo_root: bool) -> Node {
    let mut data = NodeData::new("docs", "/docs/");
    if repo_root {
        data.addon_fullname = Some("GitHub".to_string());
    }
    Node::new(NodeId(1), None, NodeRecord::folder(data))
}

fn file(sha: Option<String>) -> Node {
    let mut data = NodeData::new("a.txt", "/a.txt");
    data.extra.file_sha = sha;
    Node::new(NodeId(2), Some(NodeId(1)), NodeRecord::file(data))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: folders offer upload iff the caller can edit.
    #[test]
    fn property_folder_upload_follows_edit(
        perms in permissions(),
        repo_root in any::<bool>(),
    ) {
        let actions = resolve_actions(&folder(repo_root), perms);
        let has_upload = actions.iter().any(|a| a.kind == ActionKind::Upload);
        prop_assert_eq!(has_upload, perms.edit);
        prop_assert!(actions.iter().all(|a| a.kind != ActionKind::Delete));
    }

    /// PROPERTY: only repository roots offer zip download and the external link.
    #[test]
    fn property_repository_links_only_on_roots(
        perms in permissions(),
        repo_root in any::<bool>(),
    ) {
        let actions = resolve_actions(&folder(repo_root), perms);
        let has_zip = actions.iter().any(|a| a.kind == ActionKind::DownloadZip);
        let has_repo = actions.iter().any(|a| a.kind == ActionKind::OpenRepository);
        prop_assert_eq!(has_zip, repo_root);
        prop_assert_eq!(has_repo, repo_root);
    }

    /// PROPERTY: files always offer download; delete iff the caller can edit.
    #[test]
    fn property_file_download_always_delete_iff_edit(
        perms in permissions(),
        sha in sha(),
    ) {
        let actions = resolve_actions(&file(sha), perms);

        prop_assert_eq!(actions.first().map(|a| a.kind), Some(ActionKind::DownloadFile));
        let delete = actions.iter().find(|a| a.kind == ActionKind::Delete);
        prop_assert_eq!(delete.is_some(), perms.edit);
        if let Some(delete) = delete {
            prop_assert!(delete.hidden_until_hover);
        }
        prop_assert!(actions.iter().all(|a| a.kind != ActionKind::Upload));
    }

    /// PROPERTY: file actions are enabled exactly when a revision id is known.
    #[test]
    fn property_file_actions_need_revision(
        perms in permissions(),
        sha in sha(),
    ) {
        let has_sha = sha.is_some();
        let actions = resolve_actions(&file(sha), perms);
        prop_assert!(actions.iter().all(|a| a.enabled == has_sha));
    }
}
