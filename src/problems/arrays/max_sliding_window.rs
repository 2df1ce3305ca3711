//! Sliding Window Maximum (LeetCode 239).
//!
//! Maximum of every window of width `k`. `k == 0` or empty input yields no
//! windows; `k > n` is clamped to a single window over the whole input.
//!
//! [`window_minimums`] runs the same deque with the comparison flipped.

use crate::traits::{Problem, Variant};
use std::collections::{BinaryHeap, VecDeque};

fn window_count(n: usize, k: usize) -> Option<(usize, usize)> {
    if n == 0 || k == 0 {
        None
    } else {
        let k = k.min(n);
        Some((k, n - k + 1))
    }
}

/// Deque of indices whose values decrease front to back. The front is the
/// current maximum; indices that left the window are dropped from the front
/// and dominated values from the back. Amortized O(1) per step.
pub fn monotonic_deque(nums: &[i32], k: usize) -> Vec<i32> {
    monotonic_by(nums, k, |newer, older| newer >= older)
}

/// Sliding window minimum over the same deque scheme.
pub fn window_minimums(nums: &[i32], k: usize) -> Vec<i32> {
    monotonic_by(nums, k, |newer, older| newer <= older)
}

/// `evicts(newer, older)` tells whether `newer` makes `older` useless.
fn monotonic_by(nums: &[i32], k: usize, evicts: impl Fn(i32, i32) -> bool) -> Vec<i32> {
    let Some((k, windows)) = window_count(nums.len(), k) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(windows);
    let mut deque: VecDeque<usize> = VecDeque::with_capacity(k);

    for (i, &x) in nums.iter().enumerate() {
        if deque.front().is_some_and(|&front| front + k <= i) {
            deque.pop_front();
        }
        while deque.back().is_some_and(|&back| evicts(x, nums[back])) {
            deque.pop_back();
        }
        deque.push_back(i);
        if i + 1 >= k {
            if let Some(&front) = deque.front() {
                out.push(nums[front]);
            }
        }
    }
    out
}

pub fn brute_force(nums: &[i32], k: usize) -> Vec<i32> {
    let Some((k, _)) = window_count(nums.len(), k) else {
        return Vec::new();
    };
    nums.windows(k)
        .filter_map(|w| w.iter().copied().max())
        .collect()
}

/// Max-heap of `(value, index)` with lazy removal of stale tops.
pub fn max_heap(nums: &[i32], k: usize) -> Vec<i32> {
    let Some((k, windows)) = window_count(nums.len(), k) else {
        return Vec::new();
    };
    let mut heap: BinaryHeap<(i32, usize)> = BinaryHeap::with_capacity(nums.len());
    let mut out = Vec::with_capacity(windows);
    for (i, &x) in nums.iter().enumerate() {
        heap.push((x, i));
        if i + 1 < k {
            continue;
        }
        while heap.peek().is_some_and(|&(_, idx)| idx + k <= i) {
            heap.pop();
        }
        if let Some(&(top, _)) = heap.peek() {
            out.push(top);
        }
    }
    out
}

pub struct MaxSlidingWindow;

type Input = (Vec<i32>, usize);

impl Problem for MaxSlidingWindow {
    type Input = Input;
    type Output = Vec<i32>;
    const ID: u32 = 239;
    const SLUG: &'static str = "sliding-window-maximum";
    const TITLE: &'static str = "Sliding Window Maximum";

    fn variants() -> Vec<Variant<Input, Vec<i32>>> {
        vec![
            Variant::new("monotonic_deque", |(nums, k): &Input| monotonic_deque(nums, *k)),
            Variant::new("brute_force", |(nums, k): &Input| brute_force(nums, *k)),
            Variant::new("max_heap", |(nums, k): &Input| max_heap(nums, *k)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![1, 3, -1, -3, 5, 3, 6, 7], 3),
            (vec![1], 1),
            (vec![9, 8, 7, 6, 5], 2),
            (vec![4, 2], 5),
            (vec![], 3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        let nums = [1, 3, -1, -3, 5, 3, 6, 7];
        assert_eq!(monotonic_deque(&nums, 3), vec![3, 3, 5, 5, 6, 7]);
        assert_eq!(max_heap(&nums, 3), vec![3, 3, 5, 5, 6, 7]);
        assert_eq!(window_minimums(&nums, 3), vec![-1, -3, -3, -3, 3, 3]);
    }

    #[test]
    fn width_edge_cases() {
        assert!(monotonic_deque(&[1, 2], 0).is_empty());
        assert!(brute_force(&[], 2).is_empty());
        assert_eq!(monotonic_deque(&[4, 2], 5), vec![4]);
        assert_eq!(max_heap(&[4, 2], 5), vec![4]);
        assert_eq!(monotonic_deque(&[4, 2, 7], 1), vec![4, 2, 7]);
    }

    #[test]
    fn equal_values_survive_window_exit() {
        assert_eq!(monotonic_deque(&[5, 5, 1, 1], 2), vec![5, 5, 1]);
        assert_eq!(window_minimums(&[1, 1, 5, 5], 2), vec![1, 1, 5]);
    }
}
