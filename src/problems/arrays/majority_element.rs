//! Majority Element (LeetCode 169).
//!
//! The input is assumed to contain a value occurring more than `n / 2`
//! times; without one, the variants may return different values.

use crate::traits::{Problem, Variant};
use std::collections::HashMap;

/// Boyer-Moore voting: pairs of distinct values cancel out, the majority
/// survives.
pub fn boyer_moore(nums: &[i32]) -> Option<i32> {
    let mut candidate = None;
    let mut votes = 0usize;
    for &x in nums {
        if votes == 0 {
            candidate = Some(x);
        }
        if candidate == Some(x) {
            votes += 1;
        } else {
            votes -= 1;
        }
    }
    candidate
}

pub fn hash_count(nums: &[i32]) -> Option<i32> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &x in nums {
        let c = counts.entry(x).or_insert(0);
        *c += 1;
        if *c > nums.len() / 2 {
            return Some(x);
        }
    }
    None
}

/// After sorting, the majority covers the middle slot.
pub fn sort_middle(nums: &[i32]) -> Option<i32> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).copied()
}

pub struct MajorityElement;

impl Problem for MajorityElement {
    type Input = Vec<i32>;
    type Output = Option<i32>;
    const ID: u32 = 169;
    const SLUG: &'static str = "majority-element";
    const TITLE: &'static str = "Majority Element";

    fn variants() -> Vec<Variant<Vec<i32>, Option<i32>>> {
        vec![
            Variant::new("boyer_moore", |n: &Vec<i32>| boyer_moore(n)),
            Variant::new("hash_count", |n: &Vec<i32>| hash_count(n)),
            Variant::new("sort_middle", |n: &Vec<i32>| sort_middle(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![vec![3, 2, 3], vec![2, 2, 1, 1, 1, 2, 2], vec![7], vec![-1, 5, -1]]
    }
}
