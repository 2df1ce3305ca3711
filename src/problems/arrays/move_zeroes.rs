//! Move Zeroes (LeetCode 283).
//!
//! Move every zero to the end in place, keeping non-zero order.

use crate::traits::{Problem, Variant};

/// Swap each non-zero into the next free slot.
pub fn swap_forward(nums: &mut [i32]) {
    let mut slot = 0;
    for i in 0..nums.len() {
        if nums[i] != 0 {
            nums.swap(slot, i);
            slot += 1;
        }
    }
}

/// Compact non-zeros to the front, then zero-fill the tail.
pub fn fill_tail(nums: &mut [i32]) {
    let mut slot = 0;
    for i in 0..nums.len() {
        if nums[i] != 0 {
            nums[slot] = nums[i];
            slot += 1;
        }
    }
    nums[slot..].fill(0);
}

pub struct MoveZeroes;

impl Problem for MoveZeroes {
    type Input = Vec<i32>;
    type Output = Vec<i32>;
    const ID: u32 = 283;
    const SLUG: &'static str = "move-zeroes";
    const TITLE: &'static str = "Move Zeroes";

    fn variants() -> Vec<Variant<Vec<i32>, Vec<i32>>> {
        vec![
            Variant::new("swap_forward", |n: &Vec<i32>| {
                let mut n = n.clone();
                swap_forward(&mut n);
                n
            }),
            Variant::new("fill_tail", |n: &Vec<i32>| {
                let mut n = n.clone();
                fill_tail(&mut n);
                n
            }),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![vec![0, 1, 0, 3, 12], vec![0], vec![1, 2], vec![0, 0, 1]]
    }
}
