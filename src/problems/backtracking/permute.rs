//! Permutations (LeetCode 46).
//!
//! Input values are distinct; the variants emit all `n!` orderings in
//! different sequences.

use crate::traits::{same_elements, Problem, Variant};

/// Fix position `i` by swapping each remaining value into it.
pub fn swap_in_place(nums: &[i32]) -> Vec<Vec<i32>> {
    fn fix(nums: &mut Vec<i32>, i: usize, out: &mut Vec<Vec<i32>>) {
        if i == nums.len() {
            out.push(nums.clone());
            return;
        }
        for j in i..nums.len() {
            nums.swap(i, j);
            fix(nums, i + 1, out);
            nums.swap(i, j);
        }
    }
    let mut out = Vec::new();
    fix(&mut nums.to_vec(), 0, &mut out);
    out
}

/// Grow a path, marking which inputs are already used. Emits in
/// lexicographic order of input positions.
pub fn used_flags(nums: &[i32]) -> Vec<Vec<i32>> {
    fn grow(nums: &[i32], used: &mut [bool], path: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if path.len() == nums.len() {
            out.push(path.clone());
            return;
        }
        for i in 0..nums.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            path.push(nums[i]);
            grow(nums, used, path, out);
            path.pop();
            used[i] = false;
        }
    }
    let mut out = Vec::new();
    grow(
        nums,
        &mut vec![false; nums.len()],
        &mut Vec::with_capacity(nums.len()),
        &mut out,
    );
    out
}

pub struct Permute;

impl Problem for Permute {
    type Input = Vec<i32>;
    type Output = Vec<Vec<i32>>;
    const ID: u32 = 46;
    const SLUG: &'static str = "permutations";
    const TITLE: &'static str = "Permutations";

    fn variants() -> Vec<Variant<Vec<i32>, Vec<Vec<i32>>>> {
        vec![
            Variant::new("swap_in_place", |n: &Vec<i32>| swap_in_place(n)),
            Variant::new("used_flags", |n: &Vec<i32>| used_flags(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![vec![1, 2, 3], vec![0, 1], vec![1], vec![5, -1, 7, 2]]
    }

    fn agree(_: &Vec<i32>, expected: &Vec<Vec<i32>>, actual: &Vec<Vec<i32>>) -> bool {
        same_elements(expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_values() {
        let lex = vec![
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ];
        assert_eq!(used_flags(&[1, 2, 3]), lex);
        assert!(same_elements(&swap_in_place(&[1, 2, 3]), &lex));
    }

    #[test]
    fn counts_are_factorial() {
        assert_eq!(swap_in_place(&[1, 2, 3, 4, 5]).len(), 120);
        assert_eq!(used_flags(&[]), vec![Vec::<i32>::new()]);
    }
}
