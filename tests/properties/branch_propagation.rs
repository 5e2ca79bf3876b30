//! Property tests for branch context propagation.

use proptest::prelude::*;

use branchtree::domain::entities::{NodeData, NodeId, NodeRecord};
use branchtree::domain::ports::TreeHost;
use branchtree::domain::services::{effective_branch, propagate_branch};
use branchtree::infrastructure::NodeTree;

fn branch_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9/_-]{0,15}").unwrap()
}

fn repo_root(branch: &str) -> NodeRecord {
    let mut data = NodeData::new("octo/hello", "/");
    data.addon_fullname = Some("GitHub".to_string());
    data.branch = Some(branch.to_string());
    NodeRecord::folder(data)
}

fn child(i: usize, own: Option<String>) -> NodeRecord {
    let mut data = NodeData::new(format!("f{}", i), format!("/f{}", i));
    data.branch = own;
    NodeRecord::file(data)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after propagation every child carries the parent's branch
    /// unless it declared its own.
    #[test]
    fn property_children_take_parent_branch(
        parent in branch_name(),
        owns in proptest::collection::vec(proptest::option::of(branch_name()), 0..12),
    ) {
        let mut tree = NodeTree::new(repo_root(&parent));
        let root = tree.root();
        let records = owns.iter().enumerate().map(|(i, own)| child(i, own.clone())).collect();
        let ids = tree.attach_children(root, records);

        let assigned = propagate_branch(&mut tree, root, &ids);

        prop_assert_eq!(assigned, owns.iter().filter(|o| o.is_none()).count());
        for (id, own) in ids.iter().zip(&owns) {
            let expected = own.clone().unwrap_or_else(|| parent.clone());
            prop_assert_eq!(tree.node(*id).unwrap().data.branch.clone(), Some(expected));
        }
    }

    /// PROPERTY: propagating twice assigns nothing the second time.
    #[test]
    fn property_propagation_is_idempotent(
        parent in branch_name(),
        count in 0usize..10,
    ) {
        let mut tree = NodeTree::new(repo_root(&parent));
        let root = tree.root();
        let ids = tree.attach_children(root, (0..count).map(|i| child(i, None)).collect());

        propagate_branch(&mut tree, root, &ids);
        let before: Vec<_> = ids.iter().map(|id| tree.node(*id).unwrap().data.clone()).collect();

        prop_assert_eq!(propagate_branch(&mut tree, root, &ids), 0);
        let after: Vec<_> = ids.iter().map(|id| tree.node(*id).unwrap().data.clone()).collect();
        prop_assert_eq!(before, after);
    }

    /// PROPERTY: a branch reaches arbitrarily deep folders one level at a time.
    #[test]
    fn property_branch_reaches_nested_folders(
        parent in branch_name(),
        depth in 1usize..8,
    ) {
        let mut tree = NodeTree::new(repo_root(&parent));
        let mut current: NodeId = tree.root();
        for level in 0..depth {
            let path = format!("/{}/", "d".repeat(level + 1));
            let ids = tree.attach_children(
                current,
                vec![NodeRecord::folder(NodeData::new("d", path))],
            );
            propagate_branch(&mut tree, current, &ids);
            current = ids[0];
        }

        prop_assert_eq!(tree.node(current).unwrap().data.branch.clone(), Some(parent.clone()));
        prop_assert_eq!(effective_branch(&tree, current), Some(parent));
    }
}
