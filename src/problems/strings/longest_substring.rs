//! Longest Substring Without Repeating Characters (LeetCode 3).
//!
//! Lengths are counted in `char`s.

use crate::traits::{Problem, Variant};
use std::collections::{HashMap, HashSet};

/// Window `[start, i]` with the last index of every char; a repeat inside
/// the window moves `start` past its previous occurrence.
pub fn sliding_window_map(s: &str) -> usize {
    let mut last: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (i, c) in s.chars().enumerate() {
        if let Some(&prev) = last.get(&c) {
            if prev >= start {
                start = prev + 1;
            }
        }
        last.insert(c, i);
        best = best.max(i + 1 - start);
    }
    best
}

/// Same window with a fixed table for ASCII and a map for everything else.
/// `usize::MAX` marks a char not seen yet.
pub fn last_index_table(s: &str) -> usize {
    let mut ascii = [usize::MAX; 128];
    let mut other: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (i, c) in s.chars().enumerate() {
        let slot = if c.is_ascii() {
            &mut ascii[c as usize]
        } else {
            other.entry(c).or_insert(usize::MAX)
        };
        if *slot != usize::MAX && *slot >= start {
            start = *slot + 1;
        }
        *slot = i;
        best = best.max(i + 1 - start);
    }
    best
}

pub fn brute_force(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut best = 0;
    for i in 0..chars.len() {
        let mut seen = HashSet::new();
        for &c in &chars[i..] {
            if !seen.insert(c) {
                break;
            }
        }
        best = best.max(seen.len());
    }
    best
}

pub struct LongestSubstring;

impl Problem for LongestSubstring {
    type Input = String;
    type Output = usize;
    const ID: u32 = 3;
    const SLUG: &'static str = "longest-substring-without-repeating-characters";
    const TITLE: &'static str = "Longest Substring Without Repeating Characters";

    fn variants() -> Vec<Variant<String, usize>> {
        vec![
            Variant::new("sliding_window_map", |s: &String| sliding_window_map(s)),
            Variant::new("last_index_table", |s: &String| last_index_table(s)),
            Variant::new("brute_force", |s: &String| brute_force(s)),
        ]
    }

    fn demo_cases() -> Vec<String> {
        ["abcabcbb", "bbbbb", "pwwkew", "", " ", "abba", "滑动窗口滑动"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}
