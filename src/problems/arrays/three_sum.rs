//! 3Sum (LeetCode 15).
//!
//! All unique triplets summing to zero. Each triplet is returned sorted
//! ascending; the order of triplets is unspecified.

use crate::traits::{same_elements, Problem, Variant};
use std::collections::{BTreeSet, HashSet};

pub type Triplet = [i32; 3];

/// Sort, fix the smallest element, then close in with two pointers.
pub fn sort_two_pointers(nums: &[i32]) -> Vec<Triplet> {
    let mut nums = nums.to_vec();
    nums.sort_unstable();
    let n = nums.len();
    let mut out = Vec::new();

    for i in 0..n.saturating_sub(2) {
        if nums[i] > 0 {
            break;
        }
        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }
        let (mut lo, mut hi) = (i + 1, n - 1);
        while lo < hi {
            let sum = i64::from(nums[i]) + i64::from(nums[lo]) + i64::from(nums[hi]);
            match sum.cmp(&0) {
                std::cmp::Ordering::Less => lo += 1,
                std::cmp::Ordering::Greater => hi -= 1,
                std::cmp::Ordering::Equal => {
                    out.push([nums[i], nums[lo], nums[hi]]);
                    while lo < hi && nums[lo] == nums[lo + 1] {
                        lo += 1;
                    }
                    while lo < hi && nums[hi] == nums[hi - 1] {
                        hi -= 1;
                    }
                    lo += 1;
                    hi -= 1;
                }
            }
        }
    }
    out
}

/// For each anchor, a two-sum with a hash set over the suffix.
pub fn hash_set(nums: &[i32]) -> Vec<Triplet> {
    let mut nums = nums.to_vec();
    nums.sort_unstable();
    let mut found: BTreeSet<Triplet> = BTreeSet::new();

    for i in 0..nums.len() {
        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }
        let mut seen: HashSet<i64> = HashSet::new();
        for j in i + 1..nums.len() {
            let need = -i64::from(nums[i]) - i64::from(nums[j]);
            if seen.contains(&need) {
                // need <= nums[j] because the suffix is sorted
                found.insert([nums[i], need as i32, nums[j]]);
            }
            seen.insert(i64::from(nums[j]));
        }
    }
    found.into_iter().collect()
}

pub struct ThreeSum;

impl Problem for ThreeSum {
    type Input = Vec<i32>;
    type Output = Vec<Triplet>;
    const ID: u32 = 15;
    const SLUG: &'static str = "3sum";
    const TITLE: &'static str = "3Sum";

    fn variants() -> Vec<Variant<Vec<i32>, Vec<Triplet>>> {
        vec![
            Variant::new("sort_two_pointers", |n: &Vec<i32>| sort_two_pointers(n)),
            Variant::new("hash_set", |n: &Vec<i32>| hash_set(n)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![-1, 0, 1, 2, -1, -4],
            vec![0, 1, 1],
            vec![0, 0, 0, 0],
            vec![-2, 0, 1, 1, 2],
        ]
    }

    fn agree(_: &Vec<i32>, expected: &Vec<Triplet>, actual: &Vec<Triplet>) -> bool {
        same_elements(expected, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<Triplet>) -> Vec<Triplet> {
        v.sort();
        v
    }

    #[test]
    fn classic() {
        assert_eq!(
            sorted(sort_two_pointers(&[-1, 0, 1, 2, -1, -4])),
            vec![[-1, -1, 2], [-1, 0, 1]]
        );
        assert_eq!(
            sorted(hash_set(&[-2, 0, 1, 1, 2])),
            vec![[-2, 0, 2], [-2, 1, 1]]
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(sort_two_pointers(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
        assert_eq!(hash_set(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
    }

    #[test]
    fn too_short_or_none() {
        assert!(sort_two_pointers(&[]).is_empty());
        assert!(sort_two_pointers(&[0, 0]).is_empty());
        assert!(hash_set(&[0, 1, 1]).is_empty());
    }
}
