//! Find the Duplicate Number (LeetCode 287).
//!
//! `n + 1` integers in `1..=n`: by pigeonhole at least one value repeats.
//! Exactly one value is assumed to repeat (possibly several times). None of
//! the variants mutate their input.

use crate::error::{Error, Result};
use crate::traits::{Problem, Variant};
use std::collections::HashSet;

/// Floyd's cycle detection on the functional graph `i -> nums[i]`.
///
/// Index 0 has no incoming edge (values start at 1), so the walk from 0
/// enters a cycle whose entry is reached from two different indices: the
/// entry value is the duplicate. O(n) time, O(1) space.
///
/// # Panics
/// Panics on input outside the problem constraints; use [`find_duplicate`]
/// for untrusted input.
pub fn floyd_cycle(nums: &[i32]) -> i32 {
    let next = |i: usize| nums[i] as usize;
    let mut slow = next(0);
    let mut fast = next(next(0));
    while slow != fast {
        slow = next(slow);
        fast = next(next(fast));
    }
    let mut finder = 0;
    while finder != slow {
        finder = next(finder);
        slow = next(slow);
    }
    finder as i32
}

/// Binary search on the value range: if more than `mid` values are `<= mid`,
/// the duplicate lies in `1..=mid`. O(n log n) time, O(1) space.
pub fn binary_search_count(nums: &[i32]) -> i32 {
    let (mut lo, mut hi) = (1i32, nums.len() as i32 - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let count = nums.iter().filter(|&&x| x <= mid).count() as i32;
        if count > mid {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Sort a copy and look for equal neighbours.
pub fn sort_copy(nums: &[i32]) -> i32 {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .find(|w| w[0] == w[1])
        .map_or(-1, |w| w[0])
}

pub fn hash_set(nums: &[i32]) -> i32 {
    let mut seen = HashSet::with_capacity(nums.len());
    nums.iter().copied().find(|&x| !seen.insert(x)).unwrap_or(-1)
}

/// Validate the `n + 1` values in `1..=n` constraint, then run
/// [`floyd_cycle`].
pub fn find_duplicate(nums: &[i32]) -> Result<i32> {
    if nums.len() < 2 {
        return Err(Error::invalid(
            FindDuplicate::SLUG,
            format!("need at least 2 values, got {}", nums.len()),
        ));
    }
    let n = (nums.len() - 1) as i64;
    if let Some(&bad) = nums.iter().find(|&&x| x < 1 || i64::from(x) > n) {
        return Err(Error::invalid(
            FindDuplicate::SLUG,
            format!("value {bad} outside 1..={n}"),
        ));
    }
    Ok(floyd_cycle(nums))
}

pub struct FindDuplicate;

impl Problem for FindDuplicate {
    type Input = Vec<i32>;
    type Output = i32;
    const ID: u32 = 287;
    const SLUG: &'static str = "find-the-duplicate-number";
    const TITLE: &'static str = "Find the Duplicate Number";

    fn variants() -> Vec<Variant<Vec<i32>, i32>> {
        vec![
            Variant::new("floyd_cycle", |n: &Vec<i32>| floyd_cycle(n)),
            Variant::new("binary_search_count", |n: &Vec<i32>| binary_search_count(n)),
            Variant::new("sort_copy", |n: &Vec<i32>| sort_copy(n)),
            Variant::new("hash_set", |n: &Vec<i32>| hash_set(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![1, 3, 4, 2, 2],
            vec![3, 1, 3, 4, 2],
            vec![1, 1],
            vec![2, 2, 2, 2, 2],
            vec![4, 1, 5, 3, 2, 6, 5],
        ]
    }
}
