//! Owned binary tree used by every tree problem.
//!
//! Trees are written in LeetCode's level-order notation, where `None` marks a
//! missing child and missing children have no entries of their own:
//! `[3, 9, 20, null, null, 15, 7]`.

use std::collections::VecDeque;
use std::fmt;

/// A binary tree node owning its children.
///
/// Clone, comparison and drop use explicit stacks, so degenerate (list-like)
/// trees do not recurse once per level.
pub struct TreeNode {
    pub val: i32,
    pub left: Tree,
    pub right: Tree,
}

/// A possibly empty tree.
pub type Tree = Option<Box<TreeNode>>;

/// Child slots of a node in a flattened tree, as indices into the same
/// flattened sequence.
pub(crate) type Links = (Option<usize>, Option<usize>);

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        let (vals, links) = flatten(Some(self));
        let nodes = vals
            .into_iter()
            .map(|val| Some(Box::new(TreeNode::new(val))))
            .collect();
        match assemble(nodes, &links) {
            Some(root) => *root,
            None => TreeNode::new(self.val),
        }
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TreeNode {}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Renders the level-order notation instead of nested structs.
impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in to_level_order(Some(self)).iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(v) => write!(f, "{v}")?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("]")
    }
}

/// Build a tree from level-order notation. A leading `None` (or empty input)
/// is the empty tree; trailing entries without a parent are ignored.
pub fn from_level_order(values: &[Option<i32>]) -> Tree {
    if !matches!(values.first(), Some(Some(_))) {
        return None;
    }
    let mut links: Vec<Links> = vec![(None, None); values.len()];
    let mut queue = VecDeque::from([0usize]);
    let mut next = 1;
    while let Some(parent) = queue.pop_front() {
        for side in 0..2 {
            if next >= values.len() {
                break;
            }
            if values[next].is_some() {
                if side == 0 {
                    links[parent].0 = Some(next);
                } else {
                    links[parent].1 = Some(next);
                }
                queue.push_back(next);
            }
            next += 1;
        }
    }
    let nodes = values
        .iter()
        .map(|v| v.map(|val| Box::new(TreeNode::new(val))))
        .collect();
    assemble(nodes, &links)
}

/// Level-order notation of `root`, without trailing `None`s.
pub fn to_level_order(root: Option<&TreeNode>) -> Vec<Option<i32>> {
    let mut out = Vec::new();
    let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::from([root]);
    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                out.push(Some(node.val));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
            None => out.push(None),
        }
    }
    while out.last() == Some(&None) {
        out.pop();
    }
    out
}

/// Preorder numbering of the nodes with their child indices.
pub(crate) fn flatten(root: Option<&TreeNode>) -> (Vec<i32>, Vec<Links>) {
    let mut vals = Vec::new();
    let mut links: Vec<Links> = Vec::new();
    // (node, parent index, is left child)
    let mut stack: Vec<(&TreeNode, Option<(usize, bool)>)> =
        root.map(|n| (n, None)).into_iter().collect();
    while let Some((node, parent)) = stack.pop() {
        let idx = vals.len();
        vals.push(node.val);
        links.push((None, None));
        match parent {
            Some((p, true)) => links[p].0 = Some(idx),
            Some((p, false)) => links[p].1 = Some(idx),
            None => {}
        }
        if let Some(r) = node.right.as_deref() {
            stack.push((r, Some((idx, false))));
        }
        if let Some(l) = node.left.as_deref() {
            stack.push((l, Some((idx, true))));
        }
    }
    (vals, links)
}

/// Link flattened nodes into a tree rooted at index 0.
///
/// Every child index must be greater than its parent's, which holds for both
/// level order and preorder numbering; nodes are then linked back to front
/// without recursion.
pub(crate) fn assemble(mut nodes: Vec<Option<Box<TreeNode>>>, links: &[Links]) -> Tree {
    for i in (0..nodes.len()).rev() {
        let (l, r) = links.get(i).copied().unwrap_or((None, None));
        let left = l.and_then(|l| nodes.get_mut(l).and_then(Option::take));
        let right = r.and_then(|r| nodes.get_mut(r).and_then(Option::take));
        if let Some(node) = nodes[i].as_mut() {
            node.left = left;
            node.right = right;
        }
    }
    nodes.into_iter().next().flatten()
}
