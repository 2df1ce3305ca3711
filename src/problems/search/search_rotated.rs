//! Search in Rotated Sorted Array (LeetCode 33).
//!
//! Distinct values, sorted ascending then rotated at an unknown pivot.

use crate::traits::{Problem, Variant};

/// One binary search: at least one half around `mid` is sorted; recurse
/// into it if it brackets the target, else into the other half.
pub fn binary_search(nums: &[i32], target: i32) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, nums.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] == target {
            return Some(mid);
        }
        if nums[lo] <= nums[mid] {
            if nums[lo] <= target && target < nums[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else if nums[mid] < target && target <= nums[hi - 1] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}

/// Locate the minimum (the rotation point), then search the sorted run
/// that can contain the target.
pub fn find_pivot_then_search(nums: &[i32], target: i32) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0usize, nums.len() - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] > nums[hi] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let pivot = lo;
    let (base, run) = if pivot > 0 && target >= nums[0] {
        (0, &nums[..pivot])
    } else {
        (pivot, &nums[pivot..])
    };
    run.binary_search(&target).ok().map(|i| base + i)
}

pub fn linear(nums: &[i32], target: i32) -> Option<usize> {
    nums.iter().position(|&x| x == target)
}

pub struct SearchRotated;

type Input = (Vec<i32>, i32);

impl Problem for SearchRotated {
    type Input = Input;
    type Output = Option<usize>;
    const ID: u32 = 33;
    const SLUG: &'static str = "search-in-rotated-sorted-array";
    const TITLE: &'static str = "Search in Rotated Sorted Array";

    fn variants() -> Vec<Variant<Input, Option<usize>>> {
        vec![
            Variant::new("binary_search", |(n, t): &Input| binary_search(n, *t)),
            Variant::new("find_pivot_then_search", |(n, t): &Input| {
                find_pivot_then_search(n, *t)
            }),
            Variant::new("linear", |(n, t): &Input| linear(n, *t)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![4, 5, 6, 7, 0, 1, 2], 0),
            (vec![4, 5, 6, 7, 0, 1, 2], 3),
            (vec![1], 0),
            (vec![3, 1], 1),
            (vec![1, 3], 3),
            (vec![], 5),
        ]
    }
}
