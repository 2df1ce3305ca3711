//! Binary tree traversals: inorder (LeetCode 94), preorder (144) and
//! postorder (145).

use super::tree::{flatten, Tree, TreeNode};
use crate::traits::{Problem, Variant};

pub fn preorder_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(n) = node {
            out.push(n.val);
            walk(n.left.as_deref(), out);
            walk(n.right.as_deref(), out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

pub fn inorder_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(n) = node {
            walk(n.left.as_deref(), out);
            out.push(n.val);
            walk(n.right.as_deref(), out);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

pub fn postorder_recursive(root: Option<&TreeNode>) -> Vec<i32> {
    fn walk(node: Option<&TreeNode>, out: &mut Vec<i32>) {
        if let Some(n) = node {
            walk(n.left.as_deref(), out);
            walk(n.right.as_deref(), out);
            out.push(n.val);
        }
    }
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Explicit stack; the right child is pushed first so the left pops first.
pub fn preorder_iterative(root: Option<&TreeNode>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.val);
        if let Some(r) = node.right.as_deref() {
            stack.push(r);
        }
        if let Some(l) = node.left.as_deref() {
            stack.push(l);
        }
    }
    out
}

/// Descend left pushing ancestors, emit, then continue in the right subtree.
pub fn inorder_iterative(root: Option<&TreeNode>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut cur = root;
    loop {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left.as_deref();
        }
        let Some(node) = stack.pop() else { break };
        out.push(node.val);
        cur = node.right.as_deref();
    }
    out
}

/// Root-right-left preorder, reversed.
pub fn postorder_iterative(root: Option<&TreeNode>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.val);
        if let Some(l) = node.left.as_deref() {
            stack.push(l);
        }
        if let Some(r) = node.right.as_deref() {
            stack.push(r);
        }
    }
    out.reverse();
    out
}

/// Morris threading over a flattened copy of the tree.
///
/// Boxed children cannot point back up the tree, so the threads are index
/// links in an O(n) arena of values and child indices. The walk itself needs
/// no stack; the copy is the only auxiliary storage.
pub fn inorder_morris(root: Option<&TreeNode>) -> Vec<i32> {
    let (vals, mut links) = flatten(root);
    let mut out = Vec::with_capacity(vals.len());
    let mut cur = (!vals.is_empty()).then_some(0);
    while let Some(c) = cur {
        match links[c].0 {
            None => {
                out.push(vals[c]);
                cur = links[c].1;
            }
            Some(left) => {
                let mut pred = left;
                while let Some(r) = links[pred].1 {
                    if r == c {
                        break;
                    }
                    pred = r;
                }
                if links[pred].1 == Some(c) {
                    links[pred].1 = None;
                    out.push(vals[c]);
                    cur = links[c].1;
                } else {
                    links[pred].1 = Some(c);
                    cur = Some(left);
                }
            }
        }
    }
    out
}

pub(super) fn sample_trees() -> Vec<Tree> {
    use super::tree::from_level_order;
    vec![
        from_level_order(&[Some(1), None, Some(2), Some(3)]),
        from_level_order(&[
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            None,
            Some(8),
            None,
            None,
            Some(6),
            Some(7),
            Some(9),
        ]),
        from_level_order(&[Some(1)]),
        None,
    ]
}

pub struct InorderTraversal;

impl Problem for InorderTraversal {
    type Input = Tree;
    type Output = Vec<i32>;
    const ID: u32 = 94;
    const SLUG: &'static str = "binary-tree-inorder-traversal";
    const TITLE: &'static str = "Binary Tree Inorder Traversal";

    fn variants() -> Vec<Variant<Tree, Vec<i32>>> {
        vec![
            Variant::new("recursive", |t: &Tree| inorder_recursive(t.as_deref())),
            Variant::new("iterative", |t: &Tree| inorder_iterative(t.as_deref())),
            Variant::new("morris", |t: &Tree| inorder_morris(t.as_deref())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        sample_trees()
    }
}

pub struct PreorderTraversal;

impl Problem for PreorderTraversal {
    type Input = Tree;
    type Output = Vec<i32>;
    const ID: u32 = 144;
    const SLUG: &'static str = "binary-tree-preorder-traversal";
    const TITLE: &'static str = "Binary Tree Preorder Traversal";

    fn variants() -> Vec<Variant<Tree, Vec<i32>>> {
        vec![
            Variant::new("recursive", |t: &Tree| preorder_recursive(t.as_deref())),
            Variant::new("iterative", |t: &Tree| preorder_iterative(t.as_deref())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        sample_trees()
    }
}

pub struct PostorderTraversal;

impl Problem for PostorderTraversal {
    type Input = Tree;
    type Output = Vec<i32>;
    const ID: u32 = 145;
    const SLUG: &'static str = "binary-tree-postorder-traversal";
    const TITLE: &'static str = "Binary Tree Postorder Traversal";

    fn variants() -> Vec<Variant<Tree, Vec<i32>>> {
        vec![
            Variant::new("recursive", |t: &Tree| postorder_recursive(t.as_deref())),
            Variant::new("iterative", |t: &Tree| postorder_iterative(t.as_deref())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        sample_trees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::trees::tree::from_level_order;

    fn sample() -> Tree {
        //       1
        //      / \
        //     2   3
        //    / \
        //   4   5
        from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)])
    }

    #[test]
    fn three_orders() {
        let t = sample();
        assert_eq!(preorder_iterative(t.as_deref()), vec![1, 2, 4, 5, 3]);
        assert_eq!(inorder_iterative(t.as_deref()), vec![4, 2, 5, 1, 3]);
        assert_eq!(postorder_iterative(t.as_deref()), vec![4, 5, 2, 3, 1]);
    }

    #[test]
    fn morris_matches_recursive() {
        for t in sample_trees() {
            assert_eq!(
                inorder_morris(t.as_deref()),
                inorder_recursive(t.as_deref())
            );
        }
        assert_eq!(inorder_morris(sample().as_deref()), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn right_leaning_chain() {
        let t = from_level_order(&[Some(1), None, Some(2), Some(3)]);
        assert_eq!(inorder_recursive(t.as_deref()), vec![1, 3, 2]);
        assert_eq!(preorder_recursive(t.as_deref()), vec![1, 2, 3]);
        assert_eq!(postorder_recursive(t.as_deref()), vec![3, 2, 1]);
    }
}
