//! House Robber (LeetCode 198).
//!
//! Maximum sum of non-adjacent values. Robbing nothing is allowed, so the
//! answer is never negative.

use crate::traits::{Problem, Variant};

/// Two rolling values: best up to the previous house and the one before.
pub fn rolling(nums: &[i32]) -> i64 {
    let (mut before, mut prev) = (0i64, 0i64);
    for &x in nums {
        (before, prev) = (prev, prev.max(before + i64::from(x)));
    }
    prev
}

/// Full table, `best[i]` covering the first `i` houses.
pub fn table(nums: &[i32]) -> i64 {
    let mut best = vec![0i64; nums.len() + 1];
    for (i, &x) in nums.iter().enumerate() {
        let skip = best[i];
        let take = i64::from(x) + if i == 0 { 0 } else { best[i - 1] };
        best[i + 1] = skip.max(take);
    }
    best[nums.len()]
}

pub struct Rob;

impl Problem for Rob {
    type Input = Vec<i32>;
    type Output = i64;
    const ID: u32 = 198;
    const SLUG: &'static str = "house-robber";
    const TITLE: &'static str = "House Robber";

    fn variants() -> Vec<Variant<Vec<i32>, i64>> {
        vec![
            Variant::new("rolling", |n: &Vec<i32>| rolling(n)),
            Variant::new("table", |n: &Vec<i32>| table(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![1, 2, 3, 1],
            vec![2, 7, 9, 3, 1],
            vec![2, 1, 1, 2],
            vec![5],
            vec![],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(rolling(&[1, 2, 3, 1]), 4);
        assert_eq!(table(&[2, 7, 9, 3, 1]), 12);
        assert_eq!(rolling(&[2, 1, 1, 2]), 4);
        assert_eq!(table(&[2, 1, 1, 2]), 4);
    }

    #[test]
    fn edge_cases() {
        assert_eq!(rolling(&[]), 0);
        assert_eq!(table(&[]), 0);
        assert_eq!(rolling(&[-5, -1]), 0);
        assert_eq!(table(&[-5, -1]), 0);
        let big = vec![i32::MAX; 10];
        assert_eq!(rolling(&big), 5 * i64::from(i32::MAX));
        assert_eq!(table(&big), rolling(&big));
    }
}
