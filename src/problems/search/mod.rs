//! Binary search and its relatives.

pub mod my_sqrt;
pub mod search_matrix;
pub mod search_range;
pub mod search_rotated;
