use hot100::problems::linked_list::{list, merge_two_lists, reverse_list};
use hot100::problems::trees::tree::{from_level_order, to_level_order, Tree, TreeNode};
use hot100::problems::trees::{build_tree, invert_tree, is_valid_bst, level_order, max_depth, traversal};
use proptest::prelude::*;

/// Level-order notation over distinct values `0..n`, root always present.
fn level_order_values() -> impl Strategy<Value = Vec<Option<i32>>> {
    (1usize..32).prop_flat_map(|n| {
        let values: Vec<i32> = (0..n as i32).collect();
        (
            Just(values).prop_shuffle(),
            prop::collection::vec(prop::bool::weighted(0.75), n),
        )
            .prop_map(|(values, keep)| {
                values
                    .into_iter()
                    .zip(keep)
                    .enumerate()
                    .map(|(i, (v, k))| (i == 0 || k).then_some(v))
                    .collect()
            })
    })
}

fn tree() -> impl Strategy<Value = Tree> {
    level_order_values().prop_map(|values| from_level_order(&values))
}

fn bst_insert(slot: &mut Tree, val: i32) {
    match slot {
        Some(node) if val < node.val => bst_insert(&mut node.left, val),
        Some(node) => bst_insert(&mut node.right, val),
        None => *slot = Some(Box::new(TreeNode::new(val))),
    }
}

proptest! {
    #[test]
    fn level_order_notation_round_trips(root in tree()) {
        let notation = to_level_order(root.as_deref());
        prop_assert_eq!(from_level_order(&notation), root);
    }

    #[test]
    fn traversal_strategies_agree(root in tree()) {
        let r = root.as_deref();
        let inorder = traversal::inorder_recursive(r);
        prop_assert_eq!(traversal::inorder_iterative(r), inorder.clone());
        prop_assert_eq!(traversal::inorder_morris(r), inorder);
        prop_assert_eq!(traversal::preorder_iterative(r), traversal::preorder_recursive(r));
        prop_assert_eq!(traversal::postorder_iterative(r), traversal::postorder_recursive(r));
    }

    #[test]
    fn traversals_rebuild_the_tree(root in tree()) {
        let r = root.as_deref();
        let pre = traversal::preorder_iterative(r);
        let ino = traversal::inorder_iterative(r);
        prop_assert_eq!(&build_tree::recursive_hash_index(&pre, &ino), &root);
        prop_assert_eq!(&build_tree::iterative_stack(&pre, &ino), &root);
        prop_assert_eq!(build_tree::build_tree(&pre, &ino).unwrap(), root);
    }

    #[test]
    fn inverting_mirrors_the_inorder(root in tree()) {
        let mut mirrored_inorder = traversal::inorder_iterative(root.as_deref());
        mirrored_inorder.reverse();

        let inverted = invert_tree::iterative(root.clone());
        prop_assert_eq!(&invert_tree::recursive(root.clone()), &inverted);
        prop_assert_eq!(traversal::inorder_iterative(inverted.as_deref()), mirrored_inorder);
        prop_assert_eq!(invert_tree::recursive(inverted), root);
    }

    #[test]
    fn levels_match_depth_and_notation(root in tree()) {
        let r = root.as_deref();
        let levels = level_order::bfs_queue(r);
        prop_assert_eq!(&level_order::dfs_by_depth(r), &levels);
        prop_assert_eq!(max_depth::recursive(r), levels.len());
        prop_assert_eq!(max_depth::bfs(r), levels.len());

        let flat: Vec<i32> = levels.into_iter().flatten().collect();
        let present: Vec<i32> = to_level_order(r).into_iter().flatten().collect();
        prop_assert_eq!(flat, present);
    }

    #[test]
    fn bst_checks_agree(root in tree()) {
        let r = root.as_deref();
        let sorted = traversal::inorder_recursive(r).windows(2).all(|w| w[0] < w[1]);
        prop_assert_eq!(is_valid_bst::bounds(r), sorted);
        prop_assert_eq!(is_valid_bst::inorder(r), sorted);
    }

    #[test]
    fn inserted_trees_are_valid_bsts(values in prop::collection::btree_set(-100i32..100, 0..30)
        .prop_map(|s| s.into_iter().collect::<Vec<_>>())
        .prop_shuffle())
    {
        let mut root: Tree = None;
        for &v in &values {
            bst_insert(&mut root, v);
        }
        prop_assert!(is_valid_bst::bounds(root.as_deref()));
        prop_assert!(is_valid_bst::inorder(root.as_deref()));

        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(traversal::inorder_morris(root.as_deref()), sorted);
    }

    #[test]
    fn reversing_lists(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let mut expected = values.clone();
        expected.reverse();

        let reversed = reverse_list::iterative(list::from_slice(&values));
        prop_assert_eq!(list::to_vec(reversed.as_deref()), expected.clone());
        let reversed = reverse_list::recursive(list::from_slice(&values));
        prop_assert_eq!(list::to_vec(reversed.as_deref()), expected);
        prop_assert_eq!(reverse_list::iterative(reversed), list::from_slice(&values));
    }

    #[test]
    fn merging_sorted_lists(
        mut a in prop::collection::vec(-20i32..20, 0..30),
        mut b in prop::collection::vec(-20i32..20, 0..30),
    ) {
        a.sort_unstable();
        b.sort_unstable();
        let mut expected: Vec<i32> = a.iter().chain(&b).copied().collect();
        expected.sort_unstable();

        let merged = merge_two_lists::iterative(list::from_slice(&a), list::from_slice(&b));
        prop_assert_eq!(list::to_vec(merged.as_deref()), expected.clone());
        let merged = merge_two_lists::recursive(list::from_slice(&a), list::from_slice(&b));
        prop_assert_eq!(list::to_vec(merged.as_deref()), expected);
    }
}

#[test]
fn long_lists_clone_compare_and_drop_iteratively() {
    let values: Vec<i32> = (0..200_000).collect();
    let head = list::from_slice(&values);
    let copy = head.clone();
    assert_eq!(copy, head);

    let reversed = reverse_list::iterative(copy);
    assert_eq!(reversed.as_ref().map(|n| n.val), Some(199_999));
    assert_ne!(reversed, head);
}

#[test]
fn deep_trees_clone_compare_and_drop_iteratively() {
    let n = 200_000;
    let mut values = vec![Some(0)];
    for v in 1..n {
        values.push(Some(v));
        values.push(None);
    }
    let chain = from_level_order(&values);
    let copy = chain.clone();
    assert!(copy == chain);
    assert_eq!(traversal::preorder_iterative(copy.as_deref()).len(), n as usize);
    let inorder = traversal::inorder_morris(chain.as_deref());
    assert_eq!(inorder.first(), Some(&(n - 1)));
    assert_eq!(inorder, traversal::inorder_iterative(copy.as_deref()));

    let inverted = invert_tree::iterative(copy);
    assert!(inverted != chain);
    assert_eq!(max_depth::bfs(inverted.as_deref()), n as usize);
}
