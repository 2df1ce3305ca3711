//! Sqrt(x) (LeetCode 69).
//!
//! Floor of the square root of a non-negative `i32`; negative input gives 0.

use crate::traits::{Problem, Variant};

/// Largest `m` with `m * m <= x`, found by binary search on `0..=x`.
pub fn binary_search(x: i32) -> i32 {
    if x < 2 {
        return x.max(0);
    }
    let x = i64::from(x);
    let (mut lo, mut hi) = (1i64, x / 2);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if mid * mid <= x {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }
    hi as i32
}

/// Newton's iteration `r <- (r + x / r) / 2` from above, in integers.
pub fn newton(x: i32) -> i32 {
    if x < 2 {
        return x.max(0);
    }
    let x = i64::from(x);
    let mut r = x;
    while r * r > x {
        r = (r + x / r) / 2;
    }
    r as i32
}

/// Set result bits from the highest down, keeping each bit whose square
/// still fits.
pub fn bitwise(x: i32) -> i32 {
    if x < 2 {
        return x.max(0);
    }
    let x = i64::from(x);
    let mut r = 0i64;
    for bit in (0..16).rev() {
        let candidate = r | (1 << bit);
        if candidate * candidate <= x {
            r = candidate;
        }
    }
    r as i32
}

pub struct MySqrt;

impl Problem for MySqrt {
    type Input = i32;
    type Output = i32;
    const ID: u32 = 69;
    const SLUG: &'static str = "sqrtx";
    const TITLE: &'static str = "Sqrt(x)";

    fn variants() -> Vec<Variant<i32, i32>> {
        vec![
            Variant::new("binary_search", |x: &i32| binary_search(*x)),
            Variant::new("newton", |x: &i32| newton(*x)),
            Variant::new("bitwise", |x: &i32| bitwise(*x)),
        ]
    }

    fn demo_cases() -> Vec<i32> {
        vec![0, 1, 4, 8, 15, 16, 2147395599, i32::MAX]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        for f in [binary_search as fn(i32) -> i32, newton, bitwise] {
            assert_eq!(f(4), 2);
            assert_eq!(f(8), 2);
            assert_eq!(f(0), 0);
            assert_eq!(f(1), 1);
            assert_eq!(f(2147395599), 46339);
            assert_eq!(f(i32::MAX), 46340);
            assert_eq!(f(-9), 0);
        }
    }

    #[test]
    fn matches_float_sqrt_on_a_range() {
        for x in 0..10_000 {
            let expected = f64::from(x).sqrt().floor() as i32;
            assert_eq!(binary_search(x), expected, "x = {x}");
            assert_eq!(newton(x), expected, "x = {x}");
            assert_eq!(bitwise(x), expected, "x = {x}");
        }
    }
}
