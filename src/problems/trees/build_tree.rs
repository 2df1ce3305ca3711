//! Construct Binary Tree from Preorder and Inorder Traversal (LeetCode 105).
//!
//! Values are distinct. Inconsistent traversals yield whatever prefix of the
//! tree could be placed rather than a panic; [`build_tree`] returns an error
//! for them instead.

use super::traversal::{inorder_iterative, preorder_iterative};
use super::tree::{assemble, Links, Tree, TreeNode};
use crate::error::{Error, Result};
use crate::traits::{Problem, Variant};
use std::collections::{HashMap, HashSet};

/// Split the inorder range at the root found through a value → index map.
pub fn recursive_hash_index(preorder: &[i32], inorder: &[i32]) -> Tree {
    fn build(
        preorder: &[i32],
        next: &mut usize,
        range: (usize, usize),
        index: &HashMap<i32, usize>,
    ) -> Tree {
        let (lo, hi) = range;
        if lo >= hi {
            return None;
        }
        let val = *preorder.get(*next)?;
        let mid = *index.get(&val)?;
        if !(lo..hi).contains(&mid) {
            return None;
        }
        *next += 1;
        let left = build(preorder, next, (lo, mid), index);
        let right = build(preorder, next, (mid + 1, hi), index);
        Some(Box::new(TreeNode { val, left, right }))
    }

    let index: HashMap<i32, usize> = inorder.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut next = 0;
    build(preorder, &mut next, (0, inorder.len()), &index)
}

/// Single pass over the preorder with a stack of the open left spine.
///
/// Each new value is the left child of the stack top unless the top matches
/// the next inorder value; then ancestors are popped while they match, and
/// the value becomes the right child of the last one popped.
pub fn iterative_stack(preorder: &[i32], inorder: &[i32]) -> Tree {
    if preorder.is_empty() {
        return None;
    }
    let mut links: Vec<Links> = vec![(None, None); preorder.len()];
    let mut stack = vec![0usize];
    let mut in_idx = 0;
    for i in 1..preorder.len() {
        let Some(&top) = stack.last() else { break };
        if inorder.get(in_idx) != Some(&preorder[top]) {
            links[top].0 = Some(i);
        } else {
            let mut parent = top;
            while let Some(&t) = stack.last() {
                if inorder.get(in_idx) != Some(&preorder[t]) {
                    break;
                }
                parent = t;
                stack.pop();
                in_idx += 1;
            }
            links[parent].1 = Some(i);
        }
        stack.push(i);
    }
    let nodes = preorder
        .iter()
        .map(|&v| Some(Box::new(TreeNode::new(v))))
        .collect();
    assemble(nodes, &links)
}

/// Check that both traversals hold the same distinct values, build, and
/// reject the pair when the built tree does not reproduce both orders.
pub fn build_tree(preorder: &[i32], inorder: &[i32]) -> Result<Tree> {
    let invalid = |reason: String| Error::invalid(BuildTree::SLUG, reason);
    if preorder.len() != inorder.len() {
        return Err(invalid(format!(
            "preorder has {} values, inorder has {}",
            preorder.len(),
            inorder.len()
        )));
    }
    let mut seen = HashSet::with_capacity(preorder.len());
    if let Some(dup) = preorder.iter().find(|v| !seen.insert(**v)) {
        return Err(invalid(format!("value {dup} appears twice")));
    }
    if let Some(missing) = inorder.iter().find(|v| !seen.contains(*v)) {
        return Err(invalid(format!("value {missing} is missing from preorder")));
    }
    let tree = recursive_hash_index(preorder, inorder);
    let root = tree.as_deref();
    if preorder_iterative(root) != preorder || inorder_iterative(root) != inorder {
        return Err(invalid(
            "preorder and inorder do not describe the same tree".to_string(),
        ));
    }
    Ok(tree)
}

pub struct BuildTree;

type Input = (Vec<i32>, Vec<i32>);

impl Problem for BuildTree {
    type Input = Input;
    type Output = Tree;
    const ID: u32 = 105;
    const SLUG: &'static str = "construct-binary-tree-from-preorder-and-inorder-traversal";
    const TITLE: &'static str = "Construct Binary Tree from Preorder and Inorder Traversal";

    fn variants() -> Vec<Variant<Input, Tree>> {
        vec![
            Variant::new("recursive_hash_index", |(pre, ino): &Input| {
                recursive_hash_index(pre, ino)
            }),
            Variant::new("iterative_stack", |(pre, ino): &Input| {
                iterative_stack(pre, ino)
            }),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![3, 9, 20, 15, 7], vec![9, 3, 15, 20, 7]),
            (vec![1, 2, 4, 5, 3, 6], vec![4, 2, 5, 1, 6, 3]),
            (vec![1, 2, 3], vec![3, 2, 1]),
            (vec![1, 2, 3], vec![1, 2, 3]),
            (vec![-1], vec![-1]),
            (vec![], vec![]),
        ]
    }
}
