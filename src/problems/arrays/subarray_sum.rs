//! Subarray Sum Equals K (LeetCode 560).
//!
//! Count contiguous non-empty subarrays whose sum is `k`.

use crate::traits::{Problem, Variant};
use std::collections::HashMap;

/// Count earlier prefix sums equal to `prefix - k`.
pub fn prefix_hash(nums: &[i32], k: i32) -> usize {
    let mut counts: HashMap<i64, usize> = HashMap::from([(0, 1)]);
    let mut prefix = 0i64;
    let mut total = 0;
    for &x in nums {
        prefix += i64::from(x);
        total += counts.get(&(prefix - i64::from(k))).copied().unwrap_or(0);
        *counts.entry(prefix).or_insert(0) += 1;
    }
    total
}

pub fn brute_force(nums: &[i32], k: i32) -> usize {
    let mut total = 0;
    for i in 0..nums.len() {
        let mut sum = 0i64;
        for &x in &nums[i..] {
            sum += i64::from(x);
            if sum == i64::from(k) {
                total += 1;
            }
        }
    }
    total
}

pub struct SubarraySum;

type Input = (Vec<i32>, i32);

impl Problem for SubarraySum {
    type Input = Input;
    type Output = usize;
    const ID: u32 = 560;
    const SLUG: &'static str = "subarray-sum-equals-k";
    const TITLE: &'static str = "Subarray Sum Equals K";

    fn variants() -> Vec<Variant<Input, usize>> {
        vec![
            Variant::new("prefix_hash", |(nums, k): &Input| prefix_hash(nums, *k)),
            Variant::new("brute_force", |(nums, k): &Input| brute_force(nums, *k)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![1, 1, 1], 2),
            (vec![1, 2, 3], 3),
            (vec![1, -1, 0], 0),
            (vec![], 0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        assert_eq!(prefix_hash(&[1, 1, 1], 2), 2);
        assert_eq!(prefix_hash(&[1, 2, 3], 3), 2);
        assert_eq!(brute_force(&[1, 2, 3], 3), 2);
    }

    #[test]
    fn zero_target_with_negatives() {
        assert_eq!(prefix_hash(&[1, -1, 0], 0), 3);
        assert_eq!(brute_force(&[1, -1, 0], 0), 3);
        assert_eq!(prefix_hash(&[], 0), 0);
    }
}
