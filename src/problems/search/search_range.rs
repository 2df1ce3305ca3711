//! Find First and Last Position of Element in Sorted Array (LeetCode 34).
//!
//! `None` stands for LeetCode's `[-1, -1]`.

use crate::traits::{Problem, Variant};

/// First index whose value is `>= target`.
pub fn lower_bound(nums: &[i32], target: i32) -> usize {
    let (mut lo, mut hi) = (0, nums.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Two bound searches: `[lower_bound(t), lower_bound(t + 1) - 1]`.
pub fn lower_upper_bound(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let first = lower_bound(nums, target);
    if nums.get(first) != Some(&target) {
        return None;
    }
    let end = nums.partition_point(|&x| x <= target);
    Some((first, end - 1))
}

pub fn linear(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let first = nums.iter().position(|&x| x == target)?;
    let last = nums.iter().rposition(|&x| x == target)?;
    Some((first, last))
}

pub struct SearchRange;

type Input = (Vec<i32>, i32);

impl Problem for SearchRange {
    type Input = Input;
    type Output = Option<(usize, usize)>;
    const ID: u32 = 34;
    const SLUG: &'static str = "find-first-and-last-position-of-element-in-sorted-array";
    const TITLE: &'static str = "Find First and Last Position of Element in Sorted Array";

    fn variants() -> Vec<Variant<Input, Self::Output>> {
        vec![
            Variant::new("lower_upper_bound", |(n, t): &Input| lower_upper_bound(n, *t)),
            Variant::new("linear", |(n, t): &Input| linear(n, *t)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![5, 7, 7, 8, 8, 10], 8),
            (vec![5, 7, 7, 8, 8, 10], 6),
            (vec![], 0),
            (vec![2, 2], 2),
            (vec![1, 2, 3], i32::MAX),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        assert_eq!(lower_upper_bound(&[5, 7, 7, 8, 8, 10], 8), Some((3, 4)));
        assert_eq!(lower_upper_bound(&[5, 7, 7, 8, 8, 10], 6), None);
        assert_eq!(lower_upper_bound(&[], 0), None);
        assert_eq!(linear(&[2, 2], 2), Some((0, 1)));
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(lower_upper_bound(&[1, i32::MAX, i32::MAX], i32::MAX), Some((1, 2)));
        assert_eq!(lower_bound(&[1, 2, 3], i32::MIN), 0);
        assert_eq!(lower_bound(&[1, 2, 3], 4), 3);
    }
}
