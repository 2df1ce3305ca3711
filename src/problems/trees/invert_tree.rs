//! Invert Binary Tree (LeetCode 226).

use super::tree::{Tree, TreeNode};
use crate::traits::{Problem, Variant};
use std::mem;

pub fn recursive(root: Tree) -> Tree {
    root.map(|mut node| {
        let left = node.left.take();
        node.left = recursive(node.right.take());
        node.right = recursive(left);
        node
    })
}

/// Swap children of every node reached through an explicit stack.
pub fn iterative(mut root: Tree) -> Tree {
    let mut stack: Vec<&mut TreeNode> = root.as_deref_mut().into_iter().collect();
    while let Some(node) = stack.pop() {
        mem::swap(&mut node.left, &mut node.right);
        if let Some(l) = node.left.as_deref_mut() {
            stack.push(l);
        }
        if let Some(r) = node.right.as_deref_mut() {
            stack.push(r);
        }
    }
    root
}

pub struct InvertTree;

impl Problem for InvertTree {
    type Input = Tree;
    type Output = Tree;
    const ID: u32 = 226;
    const SLUG: &'static str = "invert-binary-tree";
    const TITLE: &'static str = "Invert Binary Tree";

    fn variants() -> Vec<Variant<Tree, Tree>> {
        vec![
            Variant::new("recursive", |t: &Tree| recursive(t.clone())),
            Variant::new("iterative", |t: &Tree| iterative(t.clone())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        super::traversal::sample_trees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::trees::tree::{from_level_order, to_level_order};

    #[test]
    fn mirrors_every_level() {
        let t = from_level_order(&[
            Some(4),
            Some(2),
            Some(7),
            Some(1),
            Some(3),
            Some(6),
            Some(9),
        ]);
        let expected = vec![
            Some(4),
            Some(7),
            Some(2),
            Some(9),
            Some(6),
            Some(3),
            Some(1),
        ];
        assert_eq!(to_level_order(recursive(t.clone()).as_deref()), expected);
        assert_eq!(to_level_order(iterative(t).as_deref()), expected);
    }

    #[test]
    fn inverting_twice_restores() {
        for t in crate::problems::trees::traversal::sample_trees() {
            assert_eq!(iterative(recursive(t.clone())), t);
        }
    }
}
