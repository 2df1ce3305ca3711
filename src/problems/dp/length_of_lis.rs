//! Longest Increasing Subsequence (LeetCode 300). Strictly increasing.

use crate::traits::{Problem, Variant};

/// `best[i]` is the longest subsequence ending at `i`. O(n²).
pub fn quadratic(nums: &[i32]) -> usize {
    let mut best = vec![1usize; nums.len()];
    for i in 0..nums.len() {
        for j in 0..i {
            if nums[j] < nums[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

/// Patience sorting: `tails[k]` is the smallest tail of any increasing
/// subsequence of length `k + 1`. O(n log n).
pub fn patience(nums: &[i32]) -> usize {
    let mut tails: Vec<i32> = Vec::new();
    for &x in nums {
        let at = tails.partition_point(|&t| t < x);
        if at == tails.len() {
            tails.push(x);
        } else {
            tails[at] = x;
        }
    }
    tails.len()
}

pub struct LengthOfLis;

impl Problem for LengthOfLis {
    type Input = Vec<i32>;
    type Output = usize;
    const ID: u32 = 300;
    const SLUG: &'static str = "longest-increasing-subsequence";
    const TITLE: &'static str = "Longest Increasing Subsequence";

    fn variants() -> Vec<Variant<Vec<i32>, usize>> {
        vec![
            Variant::new("patience", |n: &Vec<i32>| patience(n)),
            Variant::new("quadratic", |n: &Vec<i32>| quadratic(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![10, 9, 2, 5, 3, 7, 101, 18],
            vec![0, 1, 0, 3, 2, 3],
            vec![7, 7, 7, 7, 7, 7, 7],
            vec![],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(patience(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
        assert_eq!(quadratic(&[0, 1, 0, 3, 2, 3]), 4);
        assert_eq!(patience(&[7, 7, 7, 7]), 1);
        assert_eq!(quadratic(&[7, 7, 7, 7]), 1);
    }

    #[test]
    fn monotone_inputs() {
        let up: Vec<i32> = (0..50).collect();
        let down: Vec<i32> = (0..50).rev().collect();
        assert_eq!(patience(&up), 50);
        assert_eq!(quadratic(&down), 1);
        assert_eq!(patience(&[]), 0);
        assert_eq!(quadratic(&[]), 0);
    }
}
