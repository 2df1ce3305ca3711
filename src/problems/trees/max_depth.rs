//! Maximum Depth of Binary Tree (LeetCode 104).

use super::tree::{Tree, TreeNode};
use crate::traits::{Problem, Variant};
use std::collections::VecDeque;

pub fn recursive(root: Option<&TreeNode>) -> usize {
    root.map_or(0, |n| {
        1 + recursive(n.left.as_deref()).max(recursive(n.right.as_deref()))
    })
}

/// Count the levels of a breadth-first sweep.
pub fn bfs(root: Option<&TreeNode>) -> usize {
    let mut depth = 0;
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();
    while !queue.is_empty() {
        depth += 1;
        for _ in 0..queue.len() {
            if let Some(node) = queue.pop_front() {
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
        }
    }
    depth
}

pub struct MaxDepth;

impl Problem for MaxDepth {
    type Input = Tree;
    type Output = usize;
    const ID: u32 = 104;
    const SLUG: &'static str = "maximum-depth-of-binary-tree";
    const TITLE: &'static str = "Maximum Depth of Binary Tree";

    fn variants() -> Vec<Variant<Tree, usize>> {
        vec![
            Variant::new("recursive", |t: &Tree| recursive(t.as_deref())),
            Variant::new("bfs", |t: &Tree| bfs(t.as_deref())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        super::traversal::sample_trees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::trees::tree::from_level_order;

    #[test]
    fn depths() {
        let t = from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(recursive(t.as_deref()), 3);
        assert_eq!(bfs(t.as_deref()), 3);
        let chain = from_level_order(&[Some(1), None, Some(2)]);
        assert_eq!(bfs(chain.as_deref()), 2);
        assert_eq!(recursive(None), 0);
    }
}
