//! Matrix traversal and in-place transforms.

pub mod rotate_image;
pub mod set_zeroes;
pub mod spiral_order;
