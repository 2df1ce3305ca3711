//! Binary tree problems over an owned [`tree::TreeNode`].

pub mod build_tree;
pub mod invert_tree;
pub mod is_valid_bst;
pub mod level_order;
pub mod max_depth;
pub mod traversal;
pub mod tree;
