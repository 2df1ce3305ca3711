//! Maximum Subarray (LeetCode 53).
//!
//! Largest sum of a non-empty contiguous subarray; `None` for empty input.

use crate::traits::{Problem, Variant};

/// Kadane: best sum ending here is either this element alone or the
/// previous best extended by it.
pub fn kadane(nums: &[i32]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut ending_here = i64::from(first);
    let mut best = ending_here;
    for &x in rest {
        let x = i64::from(x);
        ending_here = x.max(ending_here + x);
        best = best.max(ending_here);
    }
    Some(best)
}

/// Segment summary: (total, best prefix, best suffix, best inside).
#[derive(Clone, Copy)]
struct Segment {
    total: i64,
    prefix: i64,
    suffix: i64,
    best: i64,
}

impl Segment {
    fn leaf(x: i32) -> Self {
        let x = i64::from(x);
        Self {
            total: x,
            prefix: x,
            suffix: x,
            best: x,
        }
    }

    fn join(l: Self, r: Self) -> Self {
        Self {
            total: l.total + r.total,
            prefix: l.prefix.max(l.total + r.prefix),
            suffix: r.suffix.max(r.total + l.suffix),
            best: l.best.max(r.best).max(l.suffix + r.prefix),
        }
    }
}

/// Split in halves; the best crossing subarray joins the left suffix and
/// the right prefix. O(n) work, O(log n) recursion depth.
pub fn divide_and_conquer(nums: &[i32]) -> Option<i64> {
    fn solve(nums: &[i32]) -> Segment {
        if nums.len() == 1 {
            return Segment::leaf(nums[0]);
        }
        let (l, r) = nums.split_at(nums.len() / 2);
        Segment::join(solve(l), solve(r))
    }
    if nums.is_empty() {
        None
    } else {
        Some(solve(nums).best)
    }
}

/// Best sum ending at `i` is `prefix[i + 1] - min(prefix[..=i])`.
pub fn prefix_min(nums: &[i32]) -> Option<i64> {
    if nums.is_empty() {
        return None;
    }
    let mut prefix = 0i64;
    let mut min_prefix = 0i64;
    let mut best = i64::MIN;
    for &x in nums {
        prefix += i64::from(x);
        best = best.max(prefix - min_prefix);
        min_prefix = min_prefix.min(prefix);
    }
    Some(best)
}

pub struct MaxSubarray;

impl Problem for MaxSubarray {
    type Input = Vec<i32>;
    type Output = Option<i64>;
    const ID: u32 = 53;
    const SLUG: &'static str = "maximum-subarray";
    const TITLE: &'static str = "Maximum Subarray";

    fn variants() -> Vec<Variant<Vec<i32>, Option<i64>>> {
        vec![
            Variant::new("kadane", |n: &Vec<i32>| kadane(n)),
            Variant::new("divide_and_conquer", |n: &Vec<i32>| divide_and_conquer(n)),
            Variant::new("prefix_min", |n: &Vec<i32>| prefix_min(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![-2, 1, -3, 4, -1, 2, 1, -5, 4],
            vec![1],
            vec![5, 4, -1, 7, 8],
            vec![-3, -1, -2],
            vec![],
        ]
    }
}
