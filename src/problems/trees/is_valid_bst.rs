//! Validate Binary Search Tree (LeetCode 98).
//!
//! Ordering is strict: a duplicate value anywhere makes the tree invalid.

use super::tree::{from_level_order, Tree, TreeNode};
use crate::traits::{Problem, Variant};

/// Recurse with the open interval every value in the subtree must lie in.
pub fn bounds(root: Option<&TreeNode>) -> bool {
    fn check(node: Option<&TreeNode>, low: Option<i32>, high: Option<i32>) -> bool {
        let Some(n) = node else { return true };
        if low.is_some_and(|lo| n.val <= lo) || high.is_some_and(|hi| n.val >= hi) {
            return false;
        }
        check(n.left.as_deref(), low, Some(n.val)) && check(n.right.as_deref(), Some(n.val), high)
    }
    check(root, None, None)
}

/// Iterative inorder walk; the sequence must be strictly increasing.
pub fn inorder(root: Option<&TreeNode>) -> bool {
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut prev: Option<i32> = None;
    let mut cur = root;
    loop {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left.as_deref();
        }
        let Some(node) = stack.pop() else { return true };
        if prev.is_some_and(|p| p >= node.val) {
            return false;
        }
        prev = Some(node.val);
        cur = node.right.as_deref();
    }
}

pub struct IsValidBst;

impl Problem for IsValidBst {
    type Input = Tree;
    type Output = bool;
    const ID: u32 = 98;
    const SLUG: &'static str = "validate-binary-search-tree";
    const TITLE: &'static str = "Validate Binary Search Tree";

    fn variants() -> Vec<Variant<Tree, bool>> {
        vec![
            Variant::new("bounds", |t: &Tree| bounds(t.as_deref())),
            Variant::new("inorder", |t: &Tree| inorder(t.as_deref())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        vec![
            from_level_order(&[Some(2), Some(1), Some(3)]),
            from_level_order(&[Some(5), Some(1), Some(4), None, None, Some(3), Some(6)]),
            from_level_order(&[Some(5), Some(4), Some(6), None, None, Some(3), Some(7)]),
            from_level_order(&[Some(2), Some(2), Some(2)]),
            from_level_order(&[Some(i32::MAX)]),
            None,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_verdicts() {
        let expected = [true, false, false, false, true, true];
        for (tree, want) in IsValidBst::demo_cases().iter().zip(expected) {
            assert_eq!(bounds(tree.as_deref()), want, "{tree:?}");
            assert_eq!(inorder(tree.as_deref()), want, "{tree:?}");
        }
    }

    #[test]
    fn grandchild_violating_ancestor_bound() {
        // 3 is in the right subtree of 5 but smaller than it
        let t = from_level_order(&[Some(5), Some(4), Some(6), None, None, Some(3), Some(7)]);
        assert!(!bounds(t.as_deref()));
    }

    #[test]
    fn extreme_values_are_valid_bounds() {
        let t = from_level_order(&[Some(0), Some(i32::MIN), Some(i32::MAX)]);
        assert!(bounds(t.as_deref()));
        assert!(inorder(t.as_deref()));
    }
}
