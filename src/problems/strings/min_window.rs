//! Minimum Window Substring (LeetCode 76).
//!
//! Shortest substring of `s` containing every char of `t` with
//! multiplicity. Empty string when none exists or `t` is empty.

use crate::traits::{Problem, Variant};
use std::collections::HashMap;

fn char_counts(t: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in t.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Whether `window` contains every char of `t` with multiplicity.
pub fn covers(window: &str, t: &str) -> bool {
    let have = char_counts(window);
    char_counts(t)
        .iter()
        .all(|(c, &need)| have.get(c).copied().unwrap_or(0) >= need)
}

/// Grow the right edge until the window covers `t`, then shrink the left
/// edge while it still does. `balance[c]` is how many more `c` the window
/// needs (negative when it holds a surplus); `missing` sums the positive
/// balances.
pub fn sliding_window(s: &str, t: &str) -> String {
    if t.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut balance: HashMap<char, i64> = char_counts(t)
        .into_iter()
        .map(|(c, n)| (c, n as i64))
        .collect();
    let mut missing = t.chars().count();
    let mut best: Option<(usize, usize)> = None;
    let mut left = 0;

    for (right, &c) in chars.iter().enumerate() {
        if let Some(b) = balance.get_mut(&c) {
            if *b > 0 {
                missing -= 1;
            }
            *b -= 1;
        }
        while missing == 0 {
            if best.map_or(true, |(l, r)| right - left < r - l) {
                best = Some((left, right));
            }
            if let Some(b) = balance.get_mut(&chars[left]) {
                *b += 1;
                if *b > 0 {
                    missing += 1;
                }
            }
            left += 1;
        }
    }
    best.map(|(l, r)| chars[l..=r].iter().collect())
        .unwrap_or_default()
}

/// Every start, extended until covering. O(n² · |alphabet|).
pub fn brute_force(s: &str, t: &str) -> String {
    if t.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = s.chars().collect();
    let need = char_counts(t);
    let mut best: Option<(usize, usize)> = None;
    for start in 0..chars.len() {
        let mut have: HashMap<char, usize> = HashMap::new();
        for end in start..chars.len() {
            *have.entry(chars[end]).or_insert(0) += 1;
            let done = need
                .iter()
                .all(|(c, &n)| have.get(c).copied().unwrap_or(0) >= n);
            if done {
                if best.map_or(true, |(l, r)| end - start < r - l) {
                    best = Some((start, end));
                }
                break;
            }
        }
    }
    best.map(|(l, r)| chars[l..=r].iter().collect())
        .unwrap_or_default()
}

pub struct MinWindow;

type Input = (String, String);

impl Problem for MinWindow {
    type Input = Input;
    type Output = String;
    const ID: u32 = 76;
    const SLUG: &'static str = "minimum-window-substring";
    const TITLE: &'static str = "Minimum Window Substring";

    fn variants() -> Vec<Variant<Input, String>> {
        vec![
            Variant::new("sliding_window", |(s, t): &Input| sliding_window(s, t)),
            Variant::new("brute_force", |(s, t): &Input| brute_force(s, t)),
        ]
    }

    fn demo_cases() -> Vec<Input> {
        [
            ("ADOBECODEBANC", "ABC"),
            ("a", "a"),
            ("a", "aa"),
            ("aa", "aa"),
            ("bba", "ab"),
            ("abc", ""),
        ]
        .into_iter()
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect()
    }

    /// Equal length and the candidate covers `t` as a substring of `s`.
    fn agree((s, t): &Input, expected: &String, actual: &String) -> bool {
        expected.chars().count() == actual.chars().count()
            && s.contains(actual.as_str())
            && (actual.is_empty() || covers(actual, t))
    }
}
