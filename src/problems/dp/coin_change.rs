//! Coin Change (LeetCode 322).
//!
//! Fewest coins summing to `amount`, or `None` when no combination does.
//! Coin supply is unlimited; non-positive denominations are ignored.

use crate::traits::{Problem, Variant};
use std::collections::VecDeque;

fn denominations(coins: &[i32]) -> Vec<usize> {
    coins
        .iter()
        .filter_map(|&c| usize::try_from(c).ok())
        .filter(|&c| c > 0)
        .collect()
}

/// `best[a]` is the fewest coins for amount `a`, filled from 0 upwards.
pub fn bottom_up(coins: &[i32], amount: i32) -> Option<u32> {
    let amount = usize::try_from(amount).ok()?;
    let coins = denominations(coins);
    let mut best: Vec<Option<u32>> = vec![None; amount + 1];
    best[0] = Some(0);
    for a in 1..=amount {
        best[a] = coins
            .iter()
            .filter(|&&c| c <= a)
            .filter_map(|&c| best[a - c])
            .min()
            .map(|n| n + 1);
    }
    best[amount]
}

/// Breadth-first search over remaining amounts; the first level to reach
/// zero is the answer.
pub fn bfs(coins: &[i32], amount: i32) -> Option<u32> {
    let amount = usize::try_from(amount).ok()?;
    let coins = denominations(coins);
    let mut seen = vec![false; amount + 1];
    let mut queue = VecDeque::from([(amount, 0u32)]);
    seen[amount] = true;
    while let Some((left, used)) = queue.pop_front() {
        if left == 0 {
            return Some(used);
        }
        for &c in &coins {
            if c <= left && !seen[left - c] {
                seen[left - c] = true;
                queue.push_back((left - c, used + 1));
            }
        }
    }
    None
}

pub struct CoinChange;

type Input = (Vec<i32>, i32);

impl Problem for CoinChange {
    type Input = Input;
    type Output = Option<u32>;
    const ID: u32 = 322;
    const SLUG: &'static str = "coin-change";
    const TITLE: &'static str = "Coin Change";

    fn variants() -> Vec<Variant<Input, Option<u32>>> {
        vec![
            Variant::new("bottom_up", |(coins, amount): &Input| bottom_up(coins, *amount)),
            Variant::new("bfs", |(coins, amount): &Input| bfs(coins, *amount)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        vec![
            (vec![1, 2, 5], 11),
            (vec![2], 3),
            (vec![1], 0),
            (vec![186, 419, 83, 408], 6249),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_examples() {
        assert_eq!(bottom_up(&[1, 2, 5], 11), Some(3));
        assert_eq!(bfs(&[1, 2, 5], 11), Some(3));
        assert_eq!(bottom_up(&[2], 3), None);
        assert_eq!(bfs(&[2], 3), None);
        assert_eq!(bottom_up(&[1], 0), Some(0));
        assert_eq!(bfs(&[], 0), Some(0));
    }

    #[test]
    fn greedy_is_not_enough() {
        // greedy takes 4 + 1 + 1
        assert_eq!(bottom_up(&[1, 3, 4], 6), Some(2));
        assert_eq!(bfs(&[1, 3, 4], 6), Some(2));
    }

    #[test]
    fn larger_instance_agrees() {
        assert_eq!(bottom_up(&[186, 419, 83, 408], 6249), Some(20));
        assert_eq!(bfs(&[186, 419, 83, 408], 6249), Some(20));
    }

    #[test]
    fn negative_amount_and_bad_coins() {
        assert_eq!(bottom_up(&[1], -1), None);
        assert_eq!(bfs(&[0, -3], 5), None);
    }
}
