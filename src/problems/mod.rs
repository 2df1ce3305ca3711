//! Problem modules, grouped by technique.
//!
//! Every problem module exposes one free function per solution variant, a
//! unit struct implementing [`Problem`](crate::traits::Problem), and unit
//! tests. Checked entry points returning [`Result`](crate::error::Result)
//! exist where an input can violate the problem's preconditions.

pub mod arrays;
pub mod backtracking;
pub mod dp;
pub mod linked_list;
pub mod matrix;
pub mod search;
pub mod strings;
pub mod trees;
