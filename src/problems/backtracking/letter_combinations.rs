//! Letter Combinations of a Phone Number (LeetCode 17).
//!
//! Digits `2..=9` map to their keypad letters. Any other character has no
//! letters, so it empties the result; [`letter_combinations`] rejects it.

use crate::error::{Error, Result};
use crate::traits::{Problem, Variant};
use std::collections::VecDeque;

fn letters(digit: char) -> &'static str {
    match digit {
        '2' => "abc",
        '3' => "def",
        '4' => "ghi",
        '5' => "jkl",
        '6' => "mno",
        '7' => "pqrs",
        '8' => "tuv",
        '9' => "wxyz",
        _ => "",
    }
}

/// Depth-first, one digit per level.
pub fn backtracking(digits: &str) -> Vec<String> {
    fn extend(keys: &[&str], prefix: &mut String, out: &mut Vec<String>) {
        let Some((first, rest)) = keys.split_first() else {
            out.push(prefix.clone());
            return;
        };
        for c in first.chars() {
            prefix.push(c);
            extend(rest, prefix, out);
            prefix.pop();
        }
    }
    if digits.is_empty() {
        return Vec::new();
    }
    let keys: Vec<&str> = digits.chars().map(letters).collect();
    let mut out = Vec::new();
    extend(&keys, &mut String::with_capacity(keys.len()), &mut out);
    out
}

/// Breadth-first: every queued prefix of length `i` is extended by the
/// letters of digit `i`.
pub fn iterative_queue(digits: &str) -> Vec<String> {
    if digits.is_empty() {
        return Vec::new();
    }
    let mut queue: VecDeque<String> = VecDeque::from([String::new()]);
    for (depth, digit) in digits.chars().enumerate() {
        while queue.front().is_some_and(|p| p.chars().count() == depth) {
            let Some(prefix) = queue.pop_front() else { break };
            for c in letters(digit).chars() {
                let mut next = prefix.clone();
                next.push(c);
                queue.push_back(next);
            }
        }
    }
    queue.into()
}

/// Reject characters outside `2..=9`, then run [`backtracking`].
pub fn letter_combinations(digits: &str) -> Result<Vec<String>> {
    if let Some(bad) = digits.chars().find(|c| letters(*c).is_empty()) {
        return Err(Error::invalid(
            LetterCombinations::SLUG,
            format!("{bad:?} is not a digit between 2 and 9"),
        ));
    }
    Ok(backtracking(digits))
}

pub struct LetterCombinations;

impl Problem for LetterCombinations {
    type Input = String;
    type Output = Vec<String>;
    const ID: u32 = 17;
    const SLUG: &'static str = "letter-combinations-of-a-phone-number";
    const TITLE: &'static str = "Letter Combinations of a Phone Number";

    fn variants() -> Vec<Variant<String, Vec<String>>> {
        vec![
            Variant::new("backtracking", |d: &String| backtracking(d)),
            Variant::new("iterative_queue", |d: &String| iterative_queue(d)),
        ]
    }

    fn demo_cases() -> Vec<String> {
        ["23", "2", "79", ""].map(String::from).to_vec()
    }
}
