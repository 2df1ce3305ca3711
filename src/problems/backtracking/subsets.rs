//! Subsets (LeetCode 78).
//!
//! All `2^n` subsets of distinct values. Subsets and their members may come
//! out in any order.

use crate::traits::{Problem, Variant};

pub fn backtracking(nums: &[i32]) -> Vec<Vec<i32>> {
    fn pick(nums: &[i32], start: usize, path: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        out.push(path.clone());
        for i in start..nums.len() {
            path.push(nums[i]);
            pick(nums, i + 1, path, out);
            path.pop();
        }
    }
    let mut out = Vec::with_capacity(1 << nums.len().min(20));
    pick(nums, 0, &mut Vec::new(), &mut out);
    out
}

/// Bit `i` of the mask selects `nums[i]`. Limited to fewer than 64 values.
pub fn bitmask(nums: &[i32]) -> Vec<Vec<i32>> {
    let n = nums.len().min(63);
    (0u64..1 << n)
        .map(|mask| {
            (0..n)
                .filter(|i| (mask >> i) & 1 == 1)
                .map(|i| nums[i])
                .collect()
        })
        .collect()
}

/// Start from `[[]]` and, for each value, append a copy of every subset so
/// far extended by that value.
pub fn cascading(nums: &[i32]) -> Vec<Vec<i32>> {
    let mut out: Vec<Vec<i32>> = vec![Vec::new()];
    for &x in nums {
        let grown: Vec<Vec<i32>> = out
            .iter()
            .map(|s| {
                let mut s = s.clone();
                s.push(x);
                s
            })
            .collect();
        out.extend(grown);
    }
    out
}

fn canonical(sets: &[Vec<i32>]) -> Vec<Vec<i32>> {
    let mut out: Vec<Vec<i32>> = sets
        .iter()
        .map(|s| {
            let mut s = s.clone();
            s.sort_unstable();
            s
        })
        .collect();
    out.sort();
    out
}

pub struct Subsets;

impl Problem for Subsets {
    type Input = Vec<i32>;
    type Output = Vec<Vec<i32>>;
    const ID: u32 = 78;
    const SLUG: &'static str = "subsets";
    const TITLE: &'static str = "Subsets";

    fn variants() -> Vec<Variant<Vec<i32>, Vec<Vec<i32>>>> {
        vec![
            Variant::new("backtracking", |n: &Vec<i32>| backtracking(n)),
            Variant::new("bitmask", |n: &Vec<i32>| bitmask(n)),
            Variant::new("cascading", |n: &Vec<i32>| cascading(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![vec![1, 2, 3], vec![0], vec![], vec![4, -2, 9, 1]]
    }

    fn agree(_: &Vec<i32>, expected: &Vec<Vec<i32>>, actual: &Vec<Vec<i32>>) -> bool {
        canonical(expected) == canonical(actual)
    }
}
