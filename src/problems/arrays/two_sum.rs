//! Two Sum (LeetCode 1).
//!
//! Return indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.

use crate::traits::{Problem, Variant};
use std::collections::HashMap;

/// Check every pair. O(n²) time, O(1) space.
pub fn brute_force(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let target = i64::from(target);
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if i64::from(nums[i]) + i64::from(nums[j]) == target {
                return Some((i, j));
            }
        }
    }
    None
}

/// Single pass remembering the index of every value seen so far.
pub fn hash_map(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (j, &x) in nums.iter().enumerate() {
        let need = i64::from(target) - i64::from(x);
        if let Some(&i) = seen.get(&need) {
            return Some((i, j));
        }
        seen.entry(i64::from(x)).or_insert(j);
    }
    None
}

pub struct TwoSum;

type Input = (Vec<i32>, i32);

impl Problem for TwoSum {
    type Input = Input;
    type Output = Option<(usize, usize)>;
    const ID: u32 = 1;
    const SLUG: &'static str = "two-sum";
    const TITLE: &'static str = "Two Sum";

    fn variants() -> Vec<Variant<Input, Self::Output>> {
        vec![
            Variant::new("hash_map", |(nums, target): &Input| hash_map(nums, *target)),
            Variant::new("brute_force", |(nums, target): &Input| {
                brute_force(nums, *target)
            }),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![2, 7, 11, 15], 9),
            (vec![3, 2, 4], 6),
            (vec![3, 3], 6),
            (vec![1, 2, 3], 100),
        ]
    }

    /// Any valid pair is accepted.
    fn agree(input: &Input, expected: &Self::Output, actual: &Self::Output) -> bool {
        let (nums, target) = input;
        match (*expected, *actual) {
            (None, None) => true,
            (Some(_), Some((i, j))) => {
                i < j
                    && j < nums.len()
                    && i64::from(nums[i]) + i64::from(nums[j]) == i64::from(*target)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(hash_map(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(hash_map(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(brute_force(&[3, 3], 6), Some((0, 1)));
    }

    #[test]
    fn missing_pair_and_extremes() {
        assert_eq!(hash_map(&[], 0), None);
        assert_eq!(hash_map(&[5], 10), None);
        assert_eq!(
            hash_map(&[i32::MAX, i32::MAX], -2),
            None,
            "sum must not wrap around"
        );
        assert_eq!(brute_force(&[1, i32::MIN, 0], i32::MIN), Some((1, 2)));
    }

    #[test]
    fn different_pairs_still_agree() {
        let input = (vec![1, 5, 2, 4], 6);
        assert!(TwoSum::agree(&input, &Some((0, 1)), &Some((2, 3))));
        assert!(!TwoSum::agree(&input, &Some((0, 1)), &Some((0, 2))));
        assert!(!TwoSum::agree(&input, &Some((0, 1)), &None));
        assert!(!TwoSum::agree(&input, &None, &Some((0, 1))));
        assert!(!TwoSum::agree(&input, &Some((0, 1)), &Some((1, 0))));
        assert!(!TwoSum::agree(&input, &Some((0, 1)), &Some((2, 9))));
        assert!(TwoSum::agree(&(vec![1, 2], 7), &None, &None));
    }
}
