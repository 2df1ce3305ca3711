//! Combination Sum (LeetCode 39).
//!
//! Candidates may be reused any number of times. Every combination is
//! reported in non-decreasing order; the list of combinations is unordered.
//! Non-positive candidates can never contribute and are ignored.

use crate::traits::{Problem, Variant};

fn usable(candidates: &[i32]) -> Vec<i32> {
    let mut c: Vec<i32> = candidates.iter().copied().filter(|&x| x > 0).collect();
    c.sort_unstable();
    c.dedup();
    c
}

/// Depth-first over sorted candidates; a candidate larger than the
/// remainder ends the loop since every later one is larger still.
pub fn backtracking(candidates: &[i32], target: i32) -> Vec<Vec<i32>> {
    fn search(
        cands: &[i32],
        start: usize,
        remaining: i32,
        path: &mut Vec<i32>,
        out: &mut Vec<Vec<i32>>,
    ) {
        if remaining == 0 {
            out.push(path.clone());
            return;
        }
        for (i, &c) in cands.iter().enumerate().skip(start) {
            if c > remaining {
                break;
            }
            path.push(c);
            search(cands, i, remaining - c, path, out);
            path.pop();
        }
    }
    let cands = usable(candidates);
    let mut out = Vec::new();
    if target >= 0 {
        search(&cands, 0, target, &mut Vec::new(), &mut out);
    }
    out
}

/// `buckets[t]` holds every combination summing to `t` that uses only the
/// candidates processed so far; candidates go in ascending order so each
/// combination is built sorted and never twice.
pub fn dp_buckets(candidates: &[i32], target: i32) -> Vec<Vec<i32>> {
    let Ok(target) = usize::try_from(target) else {
        return Vec::new();
    };
    let mut buckets: Vec<Vec<Vec<i32>>> = vec![Vec::new(); target + 1];
    buckets[0].push(Vec::new());
    for c in usable(candidates) {
        let step = c as usize;
        for t in step..=target {
            let grown: Vec<Vec<i32>> = buckets[t - step]
                .iter()
                .map(|combo| {
                    let mut combo = combo.clone();
                    combo.push(c);
                    combo
                })
                .collect();
            buckets[t].extend(grown);
        }
    }
    buckets.swap_remove(target)
}

fn canonical(combos: &[Vec<i32>]) -> Vec<Vec<i32>> {
    let mut out: Vec<Vec<i32>> = combos
        .iter()
        .map(|c| {
            let mut c = c.clone();
            c.sort_unstable();
            c
        })
        .collect();
    out.sort();
    out
}

pub struct CombinationSum;

type Input = (Vec<i32>, i32);

impl Problem for CombinationSum {
    type Input = Input;
    type Output = Vec<Vec<i32>>;
    const ID: u32 = 39;
    const SLUG: &'static str = "combination-sum";
    const TITLE: &'static str = "Combination Sum";

    fn variants() -> Vec<Variant<Input, Vec<Vec<i32>>>> {
        vec![
            Variant::new("backtracking", |(c, t): &Input| backtracking(c, *t)),
            Variant::new("dp_buckets", |(c, t): &Input| dp_buckets(c, *t)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![2, 3, 6, 7], 7),
            (vec![2, 3, 5], 8),
            (vec![2], 1),
            (vec![7, 3, 2], 18),
        ]
    }

    fn agree(_: &Input, expected: &Vec<Vec<i32>>, actual: &Vec<Vec<i32>>) -> bool {
        canonical(expected) == canonical(actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(backtracking(&[2, 3, 6, 7], 7), vec![vec![2, 2, 3], vec![7]]);
        assert_eq!(
            canonical(&dp_buckets(&[2, 3, 5], 8)),
            vec![vec![2, 2, 2, 2], vec![2, 3, 3], vec![3, 5]]
        );
        assert!(backtracking(&[2], 1).is_empty());
        assert!(dp_buckets(&[2], 1).is_empty());
    }

    #[test]
    fn unsorted_candidates_and_zero() {
        let a = backtracking(&[7, 0, 3, 2], 18);
        let b = dp_buckets(&[7, 0, 3, 2], 18);
        assert!(!a.is_empty());
        assert_eq!(canonical(&a), canonical(&b));
        for combo in &a {
            assert_eq!(combo.iter().sum::<i32>(), 18);
            assert!(combo.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn negative_target_is_empty() {
        assert!(backtracking(&[1], -1).is_empty());
        assert!(dp_buckets(&[1], -1).is_empty());
    }
}
