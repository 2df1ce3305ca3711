//! Binary Tree Level Order Traversal (LeetCode 102).

use super::tree::{Tree, TreeNode};
use crate::traits::{Problem, Variant};
use std::collections::VecDeque;

/// Queue drained one level at a time.
pub fn bfs_queue(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();
    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            let Some(node) = queue.pop_front() else { break };
            level.push(node.val);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        levels.push(level);
    }
    levels
}

/// Preorder walk appending each value to the bucket of its depth.
pub fn dfs_by_depth(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    fn walk(node: Option<&TreeNode>, depth: usize, levels: &mut Vec<Vec<i32>>) {
        let Some(n) = node else { return };
        if levels.len() == depth {
            levels.push(Vec::new());
        }
        levels[depth].push(n.val);
        walk(n.left.as_deref(), depth + 1, levels);
        walk(n.right.as_deref(), depth + 1, levels);
    }
    let mut levels = Vec::new();
    walk(root, 0, &mut levels);
    levels
}

pub struct LevelOrder;

impl Problem for LevelOrder {
    type Input = Tree;
    type Output = Vec<Vec<i32>>;
    const ID: u32 = 102;
    const SLUG: &'static str = "binary-tree-level-order-traversal";
    const TITLE: &'static str = "Binary Tree Level Order Traversal";

    fn variants() -> Vec<Variant<Tree, Vec<Vec<i32>>>> {
        vec![
            Variant::new("bfs_queue", |t: &Tree| bfs_queue(t.as_deref())),
            Variant::new("dfs_by_depth", |t: &Tree| dfs_by_depth(t.as_deref())),
        ]
    }

    fn demo_cases() -> Vec<Tree> {
        super::traversal::sample_trees()
    }
}
