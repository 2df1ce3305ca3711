//! Product of Array Except Self (LeetCode 238).
//!
//! `out[i]` is the product of every element but `nums[i]`, without division.
//! Products are computed in `i64`.

use crate::traits::{Problem, Variant};

pub fn prefix_suffix_arrays(nums: &[i32]) -> Vec<i64> {
    let n = nums.len();
    let mut prefix = vec![1i64; n];
    let mut suffix = vec![1i64; n];
    for i in 1..n {
        prefix[i] = prefix[i - 1] * i64::from(nums[i - 1]);
    }
    for i in (0..n.saturating_sub(1)).rev() {
        suffix[i] = suffix[i + 1] * i64::from(nums[i + 1]);
    }
    prefix.iter().zip(&suffix).map(|(p, s)| p * s).collect()
}

/// Output array holds prefixes; a running suffix product folds in from the
/// right. `nums[0]` never enters the suffix, so the product of the whole
/// array is not formed.
pub fn constant_space(nums: &[i32]) -> Vec<i64> {
    let n = nums.len();
    let mut out = vec![1i64; n];
    for i in 1..n {
        out[i] = out[i - 1] * i64::from(nums[i - 1]);
    }
    let mut suffix = 1i64;
    for i in (0..n).rev() {
        out[i] *= suffix;
        if i > 0 {
            suffix *= i64::from(nums[i]);
        }
    }
    out
}

pub struct ProductExceptSelf;

impl Problem for ProductExceptSelf {
    type Input = Vec<i32>;
    type Output = Vec<i64>;
    const ID: u32 = 238;
    const SLUG: &'static str = "product-of-array-except-self";
    const TITLE: &'static str = "Product of Array Except Self";

    fn variants() -> Vec<Variant<Vec<i32>, Vec<i64>>> {
        vec![
            Variant::new("constant_space", |n: &Vec<i32>| constant_space(n)),
            Variant::new("prefix_suffix_arrays", |n: &Vec<i32>| prefix_suffix_arrays(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![1, 2, 3, 4],
            vec![-1, 1, 0, -3, 3],
            vec![0, 0],
            vec![7],
        ]
    }
}
