//! One-dimensional dynamic programming.

pub mod climb_stairs;
pub mod coin_change;
pub mod length_of_lis;
pub mod rob;
