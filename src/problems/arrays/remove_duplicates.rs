//! Remove Duplicates from Sorted Array (LeetCode 26).
//!
//! Rewrite a sorted array in place so that its first `k` slots hold each
//! distinct value once, in the original order, and return `k`. Slots past
//! `k` are left in an unspecified state.
//!
//! [`keep_at_most`] generalizes the slow/fast pointer scheme to "each value
//! at most `limit` times" (LeetCode 80 for `limit == 2`).

use crate::traits::{Problem, Variant};

/// Slow pointer marks the last kept slot; fast pointer scans ahead.
pub fn two_pointers(nums: &mut [i32]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut slow = 0;
    for fast in 1..nums.len() {
        if nums[fast] != nums[slow] {
            slow += 1;
            nums[slow] = nums[fast];
        }
    }
    slow + 1
}

/// Standard library dedup; truncates the vector to the kept prefix.
pub fn with_dedup(nums: &mut Vec<i32>) -> usize {
    nums.dedup();
    nums.len()
}

/// Keep every value at most `limit` times.
///
/// A value is written when it differs from the element `limit` slots behind
/// the write cursor, which on sorted input means fewer than `limit` copies
/// were kept so far.
pub fn keep_at_most(nums: &mut [i32], limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let mut write = 0;
    for read in 0..nums.len() {
        if write < limit || nums[read] != nums[write - limit] {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write
}

pub struct RemoveDuplicates;

impl Problem for RemoveDuplicates {
    type Input = Vec<i32>;
    /// `(k, nums[..k])`
    type Output = (usize, Vec<i32>);
    const ID: u32 = 26;
    const SLUG: &'static str = "remove-duplicates-from-sorted-array";
    const TITLE: &'static str = "Remove Duplicates from Sorted Array";

    fn variants() -> Vec<Variant<Vec<i32>, Self::Output>> {
        vec![
            Variant::new("two_pointers", |nums: &Vec<i32>| {
                let mut nums = nums.clone();
                let k = two_pointers(&mut nums);
                nums.truncate(k);
                (k, nums)
            }),
            Variant::new("with_dedup", |nums: &Vec<i32>| {
                let mut nums = nums.clone();
                (with_dedup(&mut nums), nums)
            }),
            Variant::new("keep_at_most_one", |nums: &Vec<i32>| {
                let mut nums = nums.clone();
                let k = keep_at_most(&mut nums, 1);
                nums.truncate(k);
                (k, nums)
            }),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![1, 1, 2],
            vec![0, 0, 1, 1, 1, 2, 2, 3, 3, 4],
            vec![],
            vec![-3, -3, -3],
            vec![1, 2, 3, 4, 5],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_prefix() {
        let mut nums = vec![0, 0, 1, 1, 1, 2, 2, 3, 3, 4];
        let k = two_pointers(&mut nums);
        assert_eq!(k, 5);
        assert_eq!(&nums[..k], &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(two_pointers(&mut []), 0);
        assert_eq!(two_pointers(&mut [7]), 1);
        let mut all_same = vec![2; 6];
        assert_eq!(with_dedup(&mut all_same), 1);
        assert_eq!(all_same, vec![2]);
    }

    #[test]
    fn at_most_twice() {
        let mut nums = vec![0, 0, 1, 1, 1, 1, 2, 3, 3];
        let k = keep_at_most(&mut nums, 2);
        assert_eq!(&nums[..k], &[0, 0, 1, 1, 2, 3, 3]);

        let mut nums = vec![1, 1, 1];
        assert_eq!(keep_at_most(&mut nums, 0), 0);
        assert_eq!(keep_at_most(&mut nums, 5), 3);
    }
}
