//! Climbing Stairs (LeetCode 70).
//!
//! Ways to climb `n` steps taking one or two at a time: the Fibonacci number
//! `F(n + 1)`. The count fits a `u64` up to [`MAX_STEPS`].

use crate::error::{Error, Result};
use crate::traits::{Problem, Variant};

/// Largest `n` whose count fits a `u64`.
pub const MAX_STEPS: u32 = 92;

/// Rolling pair `(F(k + 1), F(k))`.
pub fn iterative(n: u32) -> u64 {
    let (mut a, mut b) = (1u64, 0u64);
    for _ in 0..n {
        (a, b) = (a + b, a);
    }
    a
}

/// Top-down recursion over a memo table.
pub fn memoized(n: u32) -> u64 {
    fn ways(n: usize, memo: &mut [Option<u64>]) -> u64 {
        if n < 2 {
            return 1;
        }
        if let Some(w) = memo[n] {
            return w;
        }
        let w = ways(n - 1, memo) + ways(n - 2, memo);
        memo[n] = Some(w);
        w
    }
    let n = n as usize;
    ways(n, &mut vec![None; n + 1])
}

type Mat = [[u64; 2]; 2];

fn mul(a: &Mat, b: &Mat) -> Mat {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// `[[1, 1], [1, 0]]^n` by repeated squaring; the top-left entry is the
/// answer. O(log n) multiplications.
pub fn matrix_power(n: u32) -> u64 {
    let mut result: Mat = [[1, 0], [0, 1]];
    let mut base: Mat = [[1, 1], [1, 0]];
    let mut e = n;
    while e > 0 {
        if e & 1 == 1 {
            result = mul(&result, &base);
        }
        e >>= 1;
        // the last square would never be used and can overflow
        if e > 0 {
            base = mul(&base, &base);
        }
    }
    result[0][0]
}

/// Reject `n` above [`MAX_STEPS`], then run [`iterative`].
pub fn climb_stairs(n: u32) -> Result<u64> {
    if n > MAX_STEPS {
        return Err(Error::invalid(
            ClimbStairs::SLUG,
            format!("{n} steps overflow a 64-bit count (max {MAX_STEPS})"),
        ));
    }
    Ok(iterative(n))
}

pub struct ClimbStairs;

impl Problem for ClimbStairs {
    type Input = u32;
    type Output = u64;
    const ID: u32 = 70;
    const SLUG: &'static str = "climbing-stairs";
    const TITLE: &'static str = "Climbing Stairs";

    fn variants() -> Vec<Variant<u32, u64>> {
        vec![
            Variant::new("iterative", |n: &u32| iterative(*n)),
            Variant::new("memoized", |n: &u32| memoized(*n)),
            Variant::new("matrix_power", |n: &u32| matrix_power(*n)),
        ]
    }

    fn demo_cases() -> Vec<u32> {
        vec![1, 2, 3, 5, 10, 45, MAX_STEPS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts() {
        let expected = [1u64, 1, 2, 3, 5, 8, 13];
        for (n, &want) in expected.iter().enumerate() {
            let n = n as u32;
            assert_eq!(iterative(n), want);
            assert_eq!(memoized(n), want);
            assert_eq!(matrix_power(n), want);
        }
    }

    #[test]
    fn largest_count_agrees() {
        assert_eq!(iterative(45), 1_836_311_903);
        assert_eq!(matrix_power(MAX_STEPS), iterative(MAX_STEPS));
        assert_eq!(memoized(MAX_STEPS), 12_200_160_415_121_876_738);
    }

    #[test]
    fn checked_entry_rejects_overflow() {
        assert!(climb_stairs(MAX_STEPS + 1).is_err());
        assert_eq!(climb_stairs(3).unwrap(), 3);
    }
}
