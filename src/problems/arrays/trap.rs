//! Trapping Rain Water (LeetCode 42).
//!
//! Water above bar `i` is `min(max_left(i), max_right(i)) - height[i]`.

use crate::traits::{Problem, Variant};

/// Advance the side with the lower running maximum: that maximum bounds the
/// water level there regardless of what lies in between.
pub fn two_pointers(height: &[i32]) -> i64 {
    if height.len() < 3 {
        return 0;
    }
    let (mut left, mut right) = (0, height.len() - 1);
    let (mut left_max, mut right_max) = (0, 0);
    let mut water = 0i64;
    while left < right {
        if height[left] < height[right] {
            left_max = left_max.max(height[left]);
            water += i64::from(left_max - height[left]);
            left += 1;
        } else {
            right_max = right_max.max(height[right]);
            water += i64::from(right_max - height[right]);
            right -= 1;
        }
    }
    water
}

pub fn prefix_max(height: &[i32]) -> i64 {
    let n = height.len();
    if n < 3 {
        return 0;
    }
    let mut left = vec![0; n];
    let mut right = vec![0; n];
    left[0] = height[0];
    for i in 1..n {
        left[i] = left[i - 1].max(height[i]);
    }
    right[n - 1] = height[n - 1];
    for i in (0..n - 1).rev() {
        right[i] = right[i + 1].max(height[i]);
    }
    (0..n)
        .map(|i| i64::from(left[i].min(right[i]) - height[i]))
        .sum()
}

/// Stack of indices with non-increasing heights; a taller bar closes the
/// basin on top of the stack, filled layer by layer.
pub fn monotonic_stack(height: &[i32]) -> i64 {
    let mut stack: Vec<usize> = Vec::new();
    let mut water = 0i64;
    for (i, &h) in height.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if height[top] >= h {
                break;
            }
            stack.pop();
            let Some(&left) = stack.last() else {
                break;
            };
            let width = (i - left - 1) as i64;
            let depth = i64::from(h.min(height[left]) - height[top]);
            water += width * depth;
        }
        stack.push(i);
    }
    water
}

pub struct Trap;

impl Problem for Trap {
    type Input = Vec<i32>;
    type Output = i64;
    const ID: u32 = 42;
    const SLUG: &'static str = "trapping-rain-water";
    const TITLE: &'static str = "Trapping Rain Water";

    fn variants() -> Vec<Variant<Vec<i32>, i64>> {
        vec![
            Variant::new("two_pointers", |h: &Vec<i32>| two_pointers(h)),
            Variant::new("prefix_max", |h: &Vec<i32>| prefix_max(h)),
            Variant::new("monotonic_stack", |h: &Vec<i32>| monotonic_stack(h)),
        ]
    }

    fn demo_cases() -> Vec<Vec<i32>> {
        vec![
            vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1],
            vec![4, 2, 0, 3, 2, 5],
            vec![1, 2, 3],
            vec![],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        let h = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
        assert_eq!(two_pointers(&h), 6);
        assert_eq!(prefix_max(&h), 6);
        assert_eq!(monotonic_stack(&h), 6);
        assert_eq!(monotonic_stack(&[4, 2, 0, 3, 2, 5]), 9);
    }

    #[test]
    fn monotone_terrain_holds_nothing() {
        assert_eq!(two_pointers(&[1, 2, 3, 4]), 0);
        assert_eq!(prefix_max(&[4, 3, 2, 1]), 0);
        assert_eq!(monotonic_stack(&[]), 0);
    }
}
