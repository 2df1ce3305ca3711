//! Container With Most Water (LeetCode 11).
//!
//! Pick two lines `i < j`; the container holds `min(h[i], h[j]) * (j - i)`.

use crate::traits::{Problem, Variant};

/// Move the shorter side inward: the taller side can never bound a larger
/// container with a narrower width than the current one.
pub fn two_pointers(height: &[i32]) -> i64 {
    if height.len() < 2 {
        return 0;
    }
    let (mut left, mut right) = (0, height.len() - 1);
    let mut best = 0i64;
    while left < right {
        let h = i64::from(height[left].min(height[right]));
        best = best.max(h * (right - left) as i64);
        if height[left] < height[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }
    best
}

pub fn brute_force(height: &[i32]) -> i64 {
    let mut best = 0i64;
    for i in 0..height.len() {
        for j in i + 1..height.len() {
            let h = i64::from(height[i].min(height[j]));
            best = best.max(h * (j - i) as i64);
        }
    }
    best
}

pub struct MaxArea;

impl Problem for MaxArea {
    type Input = Vec<i32>;
    type Output = i64;
    const ID: u32 = 11;
    const SLUG: &'static str = "container-with-most-water";
    const TITLE: &'static str = "Container With Most Water";

    fn variants() -> Vec<Variant<Vec<i32>, i64>> {
        vec![
            Variant::new("two_pointers", |h: &Vec<i32>| two_pointers(h)),
            Variant::new("brute_force", |h: &Vec<i32>| brute_force(h)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![1, 8, 6, 2, 5, 4, 8, 3, 7],
            vec![1, 1],
            vec![4, 3, 2, 1, 4],
            vec![1, 2, 1],
            vec![5],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        assert_eq!(two_pointers(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
        assert_eq!(two_pointers(&[4, 3, 2, 1, 4]), 16);
        assert_eq!(brute_force(&[1, 2, 1]), 2);
    }

    #[test]
    fn fewer_than_two_lines() {
        assert_eq!(two_pointers(&[]), 0);
        assert_eq!(two_pointers(&[9]), 0);
        assert_eq!(brute_force(&[9]), 0);
    }

    #[test]
    fn tall_lines_do_not_overflow() {
        let h = vec![i32::MAX; 4];
        assert_eq!(two_pointers(&h), i64::from(i32::MAX) * 3);
    }
}
