//! Tree traversals, reconstruction and inversion.
//!
//! Run with:
//! `cargo run --example traversals`

use hot100::problems::trees::tree::{from_level_order, to_level_order};
use hot100::problems::trees::{build_tree, invert_tree, level_order, max_depth, traversal};

fn main() {
    let root = from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
    let r = root.as_deref();
    println!("tree:        {root:?}");
    println!("preorder:    {:?}", traversal::preorder_iterative(r));
    println!("inorder:     {:?}", traversal::inorder_morris(r));
    println!("postorder:   {:?}", traversal::postorder_iterative(r));
    println!("levels:      {:?}", level_order::bfs_queue(r));
    println!("depth:       {}", max_depth::bfs(r));

    let pre = traversal::preorder_recursive(r);
    let ino = traversal::inorder_recursive(r);
    match build_tree::build_tree(&pre, &ino) {
        Ok(rebuilt) => println!("rebuilt:     {:?}", to_level_order(rebuilt.as_deref())),
        Err(e) => eprintln!("rebuild failed: {e}"),
    }
    if let Err(e) = build_tree::build_tree(&[1, 2], &[2, 3]) {
        println!("bad input:   {e}");
    }

    let inverted = invert_tree::iterative(root);
    println!("inverted:    {inverted:?}");
}
